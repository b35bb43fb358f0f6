use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use coinchange::session::{write_batch, DEFAULT_MAX_AMOUNT};
use coinchange::{ChangeError, Denominations, Session};
use log::{debug, warn};
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[derive(Parser, Debug)]
#[command(author, version, about = "Fewest coins for an amount, for any coin set", long_about = None)]
struct Cli {
    /// Comma-separated coin values; ties go to the earliest listed
    #[arg(long, default_value = "50,20,2,1")]
    coins: Denominations,
    /// Also show what largest-first selection would use
    #[arg(long)]
    compare_greedy: bool,
    /// Largest amount accepted
    #[arg(long, default_value_t = DEFAULT_MAX_AMOUNT)]
    max_amount: usize,
    /// Amounts to solve; prompts interactively when none are given
    amounts: Vec<usize>,
}

extern "C" fn on_sigint(_: nix::libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Without SA_RESTART a blocked stdin read fails with EINTR, which the
/// session turns into a clean exit.
fn install_interrupt_handler() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_sigint),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: the handler only stores to an atomic.
    unsafe { signal::sigaction(Signal::SIGINT, &action) }?;
    Ok(())
}

fn run(cli: Cli) -> coinchange::Result<()> {
    if !cli.amounts.is_empty() {
        if let Some(&amount) = cli.amounts.iter().find(|&&a| a > cli.max_amount) {
            return Err(ChangeError::AmountTooLarge {
                amount: amount as i128,
                limit: cli.max_amount,
            });
        }
        let stdout = io::stdout();
        write_batch(
            &mut stdout.lock(),
            &cli.amounts,
            &cli.coins,
            cli.compare_greedy,
        )?;
        return Ok(());
    }

    if let Err(e) = install_interrupt_handler() {
        warn!("could not install SIGINT handler: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Session::new(stdin.lock(), stdout.lock(), cli.coins, &INTERRUPTED)
        .compare_greedy(cli.compare_greedy)
        .max_amount(cli.max_amount)
        .run()?;
    debug!("session ended: {:?}", end);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("starting with {:?}", cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
