use crate::core::{evaluate, normalize, HeightUnit, Measurement};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::session::SessionContext;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub fn run_interactive(plain: bool) -> Result<()> {
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    let mut session = SessionContext::new(format!("cli-{}", std::process::id()));
    log::info!("starting interactive session {}", session.session_id());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout, &mut session, formatting)
}

/// Drive the prompt/evaluate loop over arbitrary streams so the session can
/// be exercised without a TTY. Returns once the user quits or input ends.
pub(crate) fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut SessionContext,
    formatting: FormattingConfig,
) -> Result<()> {
    let formatter = ColoredFormatter::new(formatting);

    writeln!(out, "{}", formatter.header("BMI Calculator"))?;
    writeln!(out, "Answer the prompts to calculate; 'q' quits.")?;
    writeln!(out)?;

    loop {
        let Some(weight) = prompt_number(input, out, &formatter, "Weight (kg)")? else {
            break;
        };
        let Some(unit) = prompt_unit(input, out, &formatter)? else {
            break;
        };
        let prompt = match unit {
            HeightUnit::Centimeters => "Height (cm)",
            HeightUnit::Meters => "Height (m)",
            HeightUnit::Feet => "Height (ft)",
        };
        let Some(height) = prompt_number(input, out, &formatter, prompt)? else {
            break;
        };

        let measurement = Measurement {
            weight_kg: weight,
            height_raw: height,
            unit,
        };
        let height_meters = normalize(measurement.height_raw, measurement.unit);
        match evaluate(measurement.weight_kg, height_meters) {
            Ok(result) => {
                session.increment();
                writeln!(
                    out,
                    "Your BMI is {}.",
                    formatter.bold(&format!("{:.2}", result.value))
                )?;
                writeln!(
                    out,
                    "{}",
                    formatter.severity(result.severity, result.band.message())
                )?;
            }
            Err(err) => {
                writeln!(out, "{}", formatter.warning(&err.to_string()))?;
            }
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Calculations this session: {}",
        session.count()
    )?;
    log::info!(
        "session {} ended after {} calculations",
        session.session_id(),
        session.count()
    );
    Ok(())
}

/// Prompt until a positive finite number arrives. `None` means quit or EOF.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    formatter: &ColoredFormatter,
    label: &str,
) -> Result<Option<f64>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let entry = line.trim();
        if is_quit(entry) {
            return Ok(None);
        }

        match entry.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(Some(value)),
            Ok(_) => {
                writeln!(out, "{}", formatter.warning("Enter a positive number."))?;
            }
            Err(_) => {
                writeln!(
                    out,
                    "{}",
                    formatter.warning(&format!("Not a number: '{entry}'."))
                )?;
            }
        }
    }
}

/// Prompt for a height unit; an empty line keeps centimeters.
fn prompt_unit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    formatter: &ColoredFormatter,
) -> Result<Option<HeightUnit>> {
    loop {
        write!(out, "Height unit [cm/m/ft] (cm): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let entry = line.trim();
        if is_quit(entry) {
            return Ok(None);
        }
        if entry.is_empty() {
            return Ok(Some(HeightUnit::Centimeters));
        }

        match HeightUnit::parse(entry) {
            Some(unit) => return Ok(Some(unit)),
            None => {
                writeln!(
                    out,
                    "{}",
                    formatter.warning(&format!("Unknown unit: '{entry}'. Use cm, m, or ft."))
                )?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn is_quit(entry: &str) -> bool {
    matches!(entry.to_lowercase().as_str(), "q" | "quit" | "exit")
}
