use inputkit::config::{KeywordLocale, PromptConfig};
use inputkit::terminal::{InputError, Menu, MenuError, Prompt, StdinSource};
use inputkit::ValidationOutcome;
use std::io::{self, Write};
use std::process::exit;
use tracing_subscriber::EnvFilter;

const OPTIONS: [&str; 9] = [
    "Integer",
    "Decimal number",
    "Yes / no",
    "Date (YYYY-MM-DD)",
    "Email",
    "Phone number",
    "ISBN",
    "Credit card",
    "Exit",
];

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_banner() {
    println!("-------------------------------------------------------------");
    println!("                        INPUTKIT                             ");
    println!("          typed prompts, validators and menus                ");
    println!("                 VERSION:   {}                           ", env!("CARGO_PKG_VERSION"));
    println!("-------------------------------------------------------------");
}

fn show<T: std::fmt::Display>(out: &mut impl Write, outcome: ValidationOutcome<T>) -> io::Result<()> {
    match outcome {
        ValidationOutcome::Valid(value) => writeln!(out, "Accepted: {}", value),
        ValidationOutcome::Invalid(reason) => writeln!(out, "Rejected: {}", reason),
    }
}

/// Runs one prompt of the chosen kind. Returns `Ok(false)` when the user picks Exit.
///
/// Read and write failures stay apart: `MenuError::Input` and `MenuError::Output`.
fn run_choice(
    choice: usize,
    prompt: &mut Prompt<StdinSource>,
    out: &mut impl Write,
) -> Result<bool, MenuError> {
    let question = match OPTIONS.get(choice - 1) {
        Some(&"Exit") | None => return Ok(false),
        Some(label) => label,
    };
    writeln!(out, "{}:", question)?;
    out.flush()?;

    match choice {
        1 => show(out, prompt.read_int()?)?,
        2 => show(out, prompt.read_double()?)?,
        3 => show(out, prompt.read_bool()?)?,
        4 => show(out, prompt.read_date()?)?,
        5 => show(out, prompt.read_email()?)?,
        6 => show(out, prompt.read_phone_flexible()?)?,
        7 => show(out, prompt.read_isbn()?)?,
        8 => show(out, prompt.read_credit_card()?)?,
        _ => return Ok(false),
    }

    Ok(true)
}

fn main() {
    init_logging();
    print_banner();

    let locale = match std::env::var("INPUTKIT_LOCALE") {
        Ok(value) => match value.parse::<KeywordLocale>() {
            Ok(locale) => locale,
            Err(e) => {
                eprintln!("{}", e);
                exit(1)
            }
        },
        Err(_) => KeywordLocale::default(),
    };
    tracing::debug!(%locale, "using boolean keywords");

    let mut prompt = Prompt::with_config(StdinSource::new(), PromptConfig::for_locale(locale));
    let mut out = io::stdout();
    let menu = Menu::new(OPTIONS).with_error_message("Invalid option, try again!");

    loop {
        let selection = match menu.select(&mut prompt, &mut out) {
            Ok(selection) => selection,
            Err(MenuError::Input(InputError::Exhausted)) => break,
            Err(e) => {
                eprintln!("{}", e);
                exit(1)
            }
        };

        match run_choice(selection.choice, &mut prompt, &mut out) {
            Ok(true) => continue,
            Ok(false) | Err(MenuError::Input(InputError::Exhausted)) => break,
            Err(e) => {
                eprintln!("{}", e);
                exit(1)
            }
        }
    }
}
