//! Blocking line reader feeding the session

use log::{debug, error};
use std::io::BufRead;
use tokio::sync::mpsc;

/// Lines buffered between the reader thread and the session
const INPUT_BUFFER: usize = 64;

/// Read lines on a dedicated thread and forward them over a channel.
///
/// The channel closes at end of input, on a read error, or when the receiver
/// is dropped. The thread is never joined: a read blocked on an interactive
/// terminal cannot be cancelled, and process exit does not wait for it.
pub fn spawn_line_reader<R>(reader: R) -> std::io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);
    std::thread::Builder::new()
        .name("bitcube-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            debug!("Session finished, input reader stopping");
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        return;
                    }
                }
            }
            debug!("Input closed");
        })?;
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_are_forwarded_then_channel_closes() {
        let mut rx = spawn_line_reader(Cursor::new("b\npress 1 2\n")).unwrap();

        assert_eq!(rx.blocking_recv().as_deref(), Some("b"));
        assert_eq!(rx.blocking_recv().as_deref(), Some("press 1 2"));
        assert_eq!(rx.blocking_recv(), None);
    }

    #[test]
    fn test_empty_input_closes_channel() {
        let mut rx = spawn_line_reader(Cursor::new("")).unwrap();
        assert_eq!(rx.blocking_recv(), None);
    }
}
