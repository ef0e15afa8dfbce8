use std::io::{self, Write};

/// Writes `text` followed by a newline. A closed pipe (`| head`) is not an
/// error.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_line(&mut stdout, text)
}

/// Writes CSV or other preformatted text exactly as given.
pub fn write_stdout_raw(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    tolerate_broken_pipe(stdout.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(stdout.flush())
}

fn write_line(writer: &mut dyn Write, text: &str) -> io::Result<()> {
    tolerate_broken_pipe(writer.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(writer.write_all(b"\n"))?;
    tolerate_broken_pipe(writer.flush())
}

fn tolerate_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{tolerate_broken_pipe, write_line};

    #[test]
    fn broken_pipe_is_swallowed_but_other_errors_are_not() {
        let broken = tolerate_broken_pipe(Err(io::Error::from(io::ErrorKind::BrokenPipe)));
        assert!(broken.is_ok());

        let denied = tolerate_broken_pipe(Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(denied.is_err());
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buffer = Vec::new();
        assert!(write_line(&mut buffer, "ok").is_ok());
        assert_eq!(buffer, b"ok\n");
    }
}
