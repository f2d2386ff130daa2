//! Terminal confirmation dialog.

use std::{
    cell::RefCell,
    io::{self, BufRead, BufReader, Stdin, Stderr, Write},
};

use platform_host::{ConfirmDialogService, ConfirmRequest, DialogChoice, DialogFuture};

/// Asks a `[y/N]` question on a text stream and reads one line as the answer.
///
/// Anything other than an explicit yes (including end of input) declines.
#[derive(Debug)]
pub struct TerminalConfirmDialogService<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl TerminalConfirmDialogService<BufReader<Stdin>, Stderr> {
    /// Prompts on stderr and reads the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalConfirmDialogService<R, W> {
    /// Creates a dialog over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    fn ask(&self, request: &ConfirmRequest) -> io::Result<DialogChoice> {
        {
            let mut output = self.output.borrow_mut();
            writeln!(output, "{}", request.title)?;
            if !request.message.is_empty() {
                writeln!(output, "{}", request.message)?;
            }
            write!(
                output,
                "{} / {} [y/N]: ",
                request.accept_label, request.decline_label
            )?;
            output.flush()?;
        }

        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;
        Ok(parse_answer(&line, &request.accept_label))
    }
}

impl<R: BufRead, W: Write> ConfirmDialogService for TerminalConfirmDialogService<R, W> {
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        Box::pin(async move {
            self.ask(request)
                .map_err(|err| format!("terminal prompt failed: {err}"))
        })
    }
}

/// Maps a typed answer to a choice; `y`, `yes`, or the accept label itself accept.
fn parse_answer(line: &str, accept_label: &str) -> DialogChoice {
    let answer = line.trim();
    let accepted = answer.eq_ignore_ascii_case("y")
        || answer.eq_ignore_ascii_case("yes")
        || (!answer.is_empty() && answer.eq_ignore_ascii_case(accept_label.trim()));
    DialogChoice::from_accepted(accepted)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> ConfirmRequest {
        ConfirmRequest {
            title: "Enjoying the app?".to_string(),
            message: "Leave a rating".to_string(),
            accept_label: "Rate Now".to_string(),
            decline_label: "Not Now".to_string(),
        }
    }

    #[test]
    fn answers_map_to_choices() {
        assert_eq!(parse_answer("y\n", "Rate"), DialogChoice::Accepted);
        assert_eq!(parse_answer(" YES ", "Rate"), DialogChoice::Accepted);
        assert_eq!(parse_answer("rate now\n", "Rate Now"), DialogChoice::Accepted);
        assert_eq!(parse_answer("\n", "Rate"), DialogChoice::Declined);
        assert_eq!(parse_answer("n", "Rate"), DialogChoice::Declined);
        assert_eq!(parse_answer("", ""), DialogChoice::Declined);
    }

    #[test]
    fn dialog_writes_prompt_and_reads_answer() {
        let mut output = Vec::new();
        let dialog = TerminalConfirmDialogService::new(&b"y\n"[..], &mut output);

        let choice = block_on(dialog.confirm(&request())).expect("confirm");
        drop(dialog);

        assert_eq!(choice, DialogChoice::Accepted);
        assert_eq!(
            String::from_utf8(output).expect("utf8"),
            "Enjoying the app?\nLeave a rating\nRate Now / Not Now [y/N]: "
        );
    }

    #[test]
    fn end_of_input_declines() {
        let dialog = TerminalConfirmDialogService::new(&b""[..], io::sink());
        let choice = block_on(dialog.confirm(&request())).expect("confirm");
        assert_eq!(choice, DialogChoice::Declined);
    }
}
