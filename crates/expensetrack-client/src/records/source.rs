use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::{ClientError, ClientResult};

pub(crate) fn read_source(path: &Path) -> ClientResult<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .map_err(|error| ClientError::records_unreadable("stdin", &error.to_string()))?;
        return Ok(body);
    }

    match fs::read_to_string(path) {
        Ok(body) => Ok(body),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(ClientError::records_not_found(path))
        }
        Err(error) => Err(ClientError::records_unreadable(
            &path.display().to_string(),
            &error.to_string(),
        )),
    }
}
