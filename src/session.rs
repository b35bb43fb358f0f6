//! Interactive front end: prompts for amounts, validates them and prints the
//! breakdown the solver finds.
//!
//! Input is read through [`BufRead`] without retrying interrupted reads, so a
//! SIGINT delivered while the prompt is waiting ends the session instead of
//! being swallowed.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::cs::approx::greedy_change;
use crate::cs::denominations::Denominations;
use crate::cs::dynamic::coin_change::{solve, ChangeTable, Solution};
use crate::error::{ChangeError, Result};

/// Amounts above this are refused unless configured otherwise; the solver
/// allocates two entries per unit of amount.
pub const DEFAULT_MAX_AMOUNT: usize = 10_000_000;

const RULE: &str = "----------------------------------------";
const BANNER_RULE: &str = "==================================================";

/// How an interactive session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered 0.
    Quit,
    /// Input was closed.
    EndOfInput,
    /// A read was interrupted or the interrupt flag was raised.
    Interrupted,
}

enum Line {
    Text(String),
    Eof,
    Interrupted,
}

/// Reads one line, returning `Line::Interrupted` instead of retrying when the
/// underlying read fails with `ErrorKind::Interrupted`.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Line> {
    let mut bytes = Vec::new();
    loop {
        let (complete, used) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(Line::Interrupted),
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                if bytes.is_empty() {
                    return Ok(Line::Eof);
                }
                return Ok(Line::Text(String::from_utf8_lossy(&bytes).into_owned()));
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    bytes.extend_from_slice(&available[..=pos]);
                    (true, pos + 1)
                }
                None => {
                    bytes.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };
        reader.consume(used);
        if complete {
            return Ok(Line::Text(String::from_utf8_lossy(&bytes).into_owned()));
        }
    }
}

/// Parses a user-typed amount.
///
/// # Errors
///
/// * `InvalidAmount` if `text` is not an integer
/// * `NegativeAmount` if it is below zero
/// * `AmountTooLarge` if it exceeds `limit`
///
/// # Examples
///
/// ```
/// use coinchange::session::parse_amount;
///
/// assert_eq!(parse_amount(" 62\n", 1000).unwrap(), 62);
/// assert!(parse_amount("-4", 1000).is_err());
/// assert!(parse_amount("4.5", 1000).is_err());
/// ```
pub fn parse_amount(text: &str, limit: usize) -> Result<usize> {
    let trimmed = text.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| ChangeError::invalid_amount(trimmed))?;

    if value < 0 {
        return Err(ChangeError::NegativeAmount(value));
    }
    match usize::try_from(value) {
        Ok(amount) if amount <= limit => Ok(amount),
        _ => Err(ChangeError::AmountTooLarge { amount: value, limit }),
    }
}

/// Writes the itemised breakdown for `amount`.
///
/// Only denominations with a non-zero count are listed. When `greedy` is
/// given, a line comparing its coin count with the optimum is appended.
pub fn write_report<W: Write>(
    out: &mut W,
    amount: usize,
    solution: &Solution,
    greedy: Option<&Solution>,
) -> io::Result<()> {
    let Solution::Solved { breakdown, total } = solution else {
        return writeln!(out, "\nNo combination of coins makes {}.", amount);
    };

    let width = breakdown
        .iter()
        .map(|(d, _)| d.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);

    writeln!(out, "\nTo make {}, you need:", amount)?;
    writeln!(out, "{}", RULE)?;
    for (denomination, count) in breakdown.used() {
        writeln!(out, "{:>2} x {:>width$} coins", count, denomination, width = width)?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Total coins needed: {}", total)?;

    match greedy.map(Solution::total) {
        None => Ok(()),
        Some(None) => writeln!(out, "Greedy (largest first) finds no combination."),
        Some(Some(g)) if g > *total => writeln!(
            out,
            "Greedy (largest first) would use {} coins; this saves {}.",
            g,
            g - total
        ),
        Some(Some(_)) => writeln!(out, "Greedy (largest first) finds the same count."),
    }
}

/// Solves every amount from one shared table and writes a report for each.
pub fn write_batch<W: Write>(
    out: &mut W,
    amounts: &[usize],
    denominations: &Denominations,
    compare_greedy: bool,
) -> io::Result<()> {
    let Some(&largest) = amounts.iter().max() else {
        return Ok(());
    };
    let table = ChangeTable::build(largest, denominations.as_slice());

    for &amount in amounts {
        let solution = table.solution(amount).unwrap_or(Solution::Unreachable);
        let greedy = compare_greedy.then(|| greedy_change(amount, denominations.as_slice()));
        write_report(out, amount, &solution, greedy.as_ref())?;
    }
    Ok(())
}

/// A prompt loop over any line source and sink.
pub struct Session<'a, R, W> {
    reader: R,
    writer: W,
    denominations: Denominations,
    compare_greedy: bool,
    max_amount: usize,
    interrupted: &'a AtomicBool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        reader: R,
        writer: W,
        denominations: Denominations,
        interrupted: &'a AtomicBool,
    ) -> Self {
        Self {
            reader,
            writer,
            denominations,
            compare_greedy: false,
            max_amount: DEFAULT_MAX_AMOUNT,
            interrupted,
        }
    }

    /// Also report how many coins largest-first selection would use.
    pub fn compare_greedy(mut self, enabled: bool) -> Self {
        self.compare_greedy = enabled;
        self
    }

    pub fn max_amount(mut self, limit: usize) -> Self {
        self.max_amount = limit;
        self
    }

    /// Runs until the user enters 0, input ends or an interrupt arrives.
    ///
    /// Invalid and negative amounts are reported and asked for again; only
    /// I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.write_banner()?;

        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return self.finish_interrupted();
            }

            write!(self.writer, "\nEnter the amount (0 to quit): ")?;
            self.writer.flush()?;

            let text = match read_line(&mut self.reader)? {
                Line::Text(text) => text,
                Line::Eof => {
                    writeln!(self.writer)?;
                    info!("input closed, ending session");
                    return Ok(SessionEnd::EndOfInput);
                }
                Line::Interrupted => return self.finish_interrupted(),
            };

            let amount = match parse_amount(&text, self.max_amount) {
                Ok(amount) => amount,
                Err(e) => {
                    debug!("rejected input {:?}: {}", text.trim(), e);
                    writeln!(self.writer, "{}", Self::hint(&e))?;
                    continue;
                }
            };

            if amount == 0 {
                writeln!(self.writer, "Thank you for using the Coin Change Calculator!")?;
                return Ok(SessionEnd::Quit);
            }

            let solution = solve(amount, self.denominations.as_slice());
            let greedy = self
                .compare_greedy
                .then(|| greedy_change(amount, self.denominations.as_slice()));
            write_report(&mut self.writer, amount, &solution, greedy.as_ref())?;
        }
    }

    fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Coin Change Calculator")?;
        writeln!(
            self.writer,
            "Available coins: {} (unlimited supply)",
            self.denominations
        )?;
        writeln!(self.writer, "{}", BANNER_RULE)
    }

    fn finish_interrupted(&mut self) -> Result<SessionEnd> {
        writeln!(self.writer, "\n\nProgram interrupted. Goodbye!")?;
        self.writer.flush()?;
        info!("session interrupted");
        Ok(SessionEnd::Interrupted)
    }

    fn hint(error: &ChangeError) -> String {
        match error {
            ChangeError::NegativeAmount(_) => "Please enter a positive amount.".to_string(),
            ChangeError::AmountTooLarge { limit, .. } => {
                format!("Please enter an amount no larger than {}.", limit)
            }
            _ => "Please enter a valid integer.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn run_session(input: &str) -> (SessionEnd, String) {
        let flag = AtomicBool::new(false);
        let mut out = Vec::new();
        let end = Session::new(Cursor::new(input), &mut out, Denominations::default(), &flag)
            .run()
            .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    /// Serves its lines, then fails the next read as if a signal arrived.
    struct InterruptedAfter {
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for InterruptedAfter {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.inner.position() as usize >= self.inner.get_ref().len() {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt)
        }
    }

    #[test]
    fn test_quit_on_zero() {
        let (end, out) = run_session("0\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.starts_with("Coin Change Calculator\nAvailable coins: 50, 20, 2, 1"));
        assert!(out.contains("Thank you for using the Coin Change Calculator!"));
    }

    #[test]
    fn test_reports_breakdown() {
        let (end, out) = run_session("62\n0\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("To make 62, you need:"));
        assert!(out.contains(" 3 x 20 coins\n"));
        assert!(out.contains(" 1 x  2 coins\n"));
        assert!(!out.contains("x 50 coins"));
        assert!(out.contains("Total coins needed: 4"));
    }

    #[test]
    fn test_invalid_input_is_asked_again() {
        let (end, out) = run_session("abc\n-5\n4.5\n1\n0\n");
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(out.matches("Please enter a valid integer.").count(), 2);
        assert_eq!(out.matches("Please enter a positive amount.").count(), 1);
        assert!(out.contains(" 1 x  1 coins"));
        assert_eq!(out.matches("Enter the amount (0 to quit): ").count(), 5);
    }

    #[test]
    fn test_amount_limit() {
        let flag = AtomicBool::new(false);
        let mut out = Vec::new();
        Session::new(Cursor::new("101\n0\n"), &mut out, Denominations::default(), &flag)
            .max_amount(100)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Please enter an amount no larger than 100."));
    }

    #[test]
    fn test_end_of_input() {
        let (end, out) = run_session("2");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains(" 1 x  2 coins"));
    }

    #[test]
    fn test_unreachable_amount() {
        let flag = AtomicBool::new(false);
        let mut out = Vec::new();
        let coins = Denominations::new(vec![50, 20, 2]).unwrap();
        Session::new(Cursor::new("3\n0\n"), &mut out, coins, &flag)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("No combination of coins makes 3."));
    }

    #[test]
    fn test_interrupted_read() {
        let flag = AtomicBool::new(false);
        let mut out = Vec::new();
        let reader = InterruptedAfter {
            inner: Cursor::new(b"62\n".to_vec()),
        };
        let end = Session::new(reader, &mut out, Denominations::default(), &flag)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(out.contains("Total coins needed: 4"));
        assert!(out.ends_with("Program interrupted. Goodbye!\n"));
    }

    #[test]
    fn test_interrupt_flag() {
        let flag = AtomicBool::new(true);
        let mut out = Vec::new();
        let end = Session::new(Cursor::new("62\n"), &mut out, Denominations::default(), &flag)
            .run()
            .unwrap();
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(!String::from_utf8(out).unwrap().contains("To make"));
    }

    #[test]
    fn test_greedy_comparison() {
        let flag = AtomicBool::new(false);
        let mut out = Vec::new();
        Session::new(Cursor::new("62\n42\n0\n"), &mut out, Denominations::default(), &flag)
            .compare_greedy(true)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Greedy (largest first) would use 7 coins; this saves 3."));
        assert!(out.contains("Greedy (largest first) finds the same count."));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("  84 ", 1000).unwrap(), 84);
        assert_eq!(parse_amount("0", 1000).unwrap(), 0);
        assert!(matches!(
            parse_amount("", 1000),
            Err(ChangeError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("-1", 1000),
            Err(ChangeError::NegativeAmount(-1))
        ));
        assert!(matches!(
            parse_amount("1001", 1000),
            Err(ChangeError::AmountTooLarge { amount: 1001, limit: 1000 })
        ));
    }

    #[test]
    fn test_write_report_wide_denominations() {
        let mut out = Vec::new();
        write_report(&mut out, 205, &solve(205, &[100, 5]), None).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(" 2 x 100 coins\n"));
        assert!(out.contains(" 1 x   5 coins\n"));
    }

    #[test]
    fn test_write_batch() {
        let mut out = Vec::new();
        write_batch(&mut out, &[62, 3, 84], &Denominations::default(), true).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("To make 62, you need:"));
        assert!(out.contains("To make 3, you need:"));
        assert!(out.contains("Total coins needed: 6"));
        assert!(out.contains("Greedy (largest first) would use 9 coins; this saves 3."));

        let mut empty = Vec::new();
        write_batch(&mut empty, &[], &Denominations::default(), false).unwrap();
        assert!(empty.is_empty());
    }
}
