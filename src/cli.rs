//! Command-line front end.
//!
//! `benefits calculate` prices a single employee from flags. `benefits form`
//! runs a line-driven session on stdin that behaves like the benefits form:
//! each change prints the updated pay after benefits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::calculation::{BenefitCalculator, format_currency};
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::form::{FormEvent, FormState};
use crate::models::Employee;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "benefits",
    about = "Compute an employee's salary after the cost of benefits",
    version
)]
struct Cli {
    /// Benefits configuration file (defaults to the standard plan)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate pay after benefits for one employee
    Calculate(CalculateArgs),
    /// Start an interactive form session reading commands from stdin
    Form,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// Employee name
    #[arg(long, default_value = "")]
    name: String,
    /// Dependent name (repeat for each dependent)
    #[arg(long = "dependent")]
    dependents: Vec<String>,
    /// Yearly salary (defaults to the configured payroll)
    #[arg(long)]
    salary: Option<Decimal>,
    /// Print the itemized result as JSON
    #[arg(long)]
    json: bool,
}

/// Parses arguments, installs logging and runs the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(telemetry::DEFAULT_LOG_LEVEL)?;

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    let stdout = io::stdout();
    match cli.command {
        Command::Calculate(args) => run_calculate(&config, args, &mut stdout.lock()),
        Command::Form => {
            let mut form = FormState::from_config(&config);
            let stdin = io::stdin();
            run_form_session(
                &mut form,
                stdin.lock(),
                &mut stdout.lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(())
        }
    }
}

fn run_calculate(
    config: &ConfigLoader,
    args: CalculateArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let salary = args.salary.unwrap_or_else(|| config.yearly_salary());
    if salary < Decimal::ZERO {
        bail!("salary must not be negative");
    }
    if args.dependents.len() > config.dependent_limit() {
        return Err(EngineError::DependentLimitReached {
            limit: config.dependent_limit(),
        }
        .into());
    }
    let employee = Employee::new(args.name, salary, args.dependents);
    let calculator = BenefitCalculator::with_policy(employee, config.policy());

    if args.json {
        let result = calculator.calculate_detailed();
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", format_currency(calculator.calculate()))?;
    }
    Ok(())
}

/// One line of input to a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Forward an input event to the form.
    Event(FormEvent),
    /// Print the current total.
    Total,
    /// Print the itemized result as JSON.
    Details,
    /// End the session.
    Quit,
}

/// Parses one session line.
///
/// Accepted forms: `name [NAME]`, `add`, `dependent INDEX [NAME]`, `total`,
/// `details`, `quit` (or `exit`). Names run to the end of the line and may be blank,
/// which clears the field.
pub fn parse_form_command(line: &str) -> Result<FormCommand, String> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "name" => Ok(FormCommand::Event(FormEvent::EmployeeNameChanged(
            rest.to_string(),
        ))),
        "add" => Ok(FormCommand::Event(FormEvent::DependentAdded)),
        "dependent" => {
            let (index, value) = match rest.split_once(char::is_whitespace) {
                Some((index, value)) => (index, value.trim()),
                None => (rest, ""),
            };
            let index = index
                .parse::<usize>()
                .map_err(|_| format!("invalid dependent index '{}'", index))?;
            Ok(FormCommand::Event(FormEvent::DependentChanged {
                index,
                value: value.to_string(),
            }))
        }
        "total" => Ok(FormCommand::Total),
        "details" => Ok(FormCommand::Details),
        "quit" | "exit" => Ok(FormCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}'", other)),
    }
}

/// Drives a form session until `quit` or end of input.
///
/// Totals go to `out`; warnings and bad commands go to `err` and the session
/// carries on.
pub fn run_form_session<R: BufRead, W: Write, E: Write>(
    form: &mut FormState,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    writeln!(out, "{}", form.display_total())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_form_command(&line) {
            Ok(FormCommand::Event(FormEvent::DependentAdded)) => {
                match form.apply(FormEvent::DependentAdded) {
                    Ok(_) => writeln!(
                        out,
                        "dependent fields: {}/{}",
                        form.dependent_fields().len(),
                        form.dependent_fields().limit()
                    )?,
                    Err(e) => writeln!(err, "{}", e)?,
                }
            }
            Ok(FormCommand::Event(event)) => match form.apply(event) {
                Ok(_) => writeln!(out, "{}", form.display_total())?,
                Err(e) => writeln!(err, "{}", e)?,
            },
            Ok(FormCommand::Total) => writeln!(out, "{}", form.display_total())?,
            Ok(FormCommand::Details) => {
                serde_json::to_writer_pretty(&mut *out, &form.result())?;
                writeln!(out)?;
            }
            Ok(FormCommand::Quit) => break,
            Err(message) => writeln!(err, "{}", message)?,
        }
    }
    Ok(())
}
