use std::{
    env,
    io::{self, Write},
};

use anyhow::Context;
use clap::Parser;
use tip_cli::{
    Session,
    cli::{Cli, Mode},
    logging,
    render::render_form,
};
use tip_core::CalculatorForm;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.load_config()?;
    let rust_log = env::var("RUST_LOG").ok();
    logging::init_logging(&cli.log_directive(&config, rust_log.as_deref()))?;
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    let mut form = CalculatorForm::new();
    for command in cli.field_commands() {
        let outcome = command.apply(&mut form);
        debug!(?command, ?outcome, "flag applied");
    }

    match cli.mode() {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::with_form(form, stdin.lock(), io::stdout(), &config);
            session.run().context("interactive session failed")?;
        }
        Mode::OneShot => {
            info!(
                tip_per_person = %form.tip_per_person(),
                total_per_person = %form.total_per_person(),
                "split calculated"
            );
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", render_form(&form.view())).context("cannot write to stdout")?;
        }
    }

    Ok(())
}
