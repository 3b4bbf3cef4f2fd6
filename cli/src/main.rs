use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::WrapErr;
use hangeul_jamo::*;
use tracing_subscriber::EnvFilter;

/// разложение слогов хангыль на чамо и сборка обратно
#[derive(Parser, Debug)]
#[command(name = "hangeul", version)]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command
{
    /// разложить слоги на чамо
    Decompose(Codec),
    /// собрать слоги из чамо
    Compose(Codec),
    /// разложить составное чамо (один символ) или собрать его из двух
    Compound
    {
        #[arg(required = true)]
        jamo: Vec<char>,
    },
    /// позиционное чамо в совместимое, или совместимое в позиционное с указанной позицией
    Convert
    {
        c: char,

        /// lead, vowel или tail
        #[arg(long)]
        role: Option<String>,
    },
    /// свойства каждого символа текста
    Inspect
    {
        text: String,
    },
}

#[derive(Args, Debug)]
struct Codec
{
    /// файл с текстом, без него или с "-" - стандартный ввод
    file: Option<PathBuf>,

    /// позиционные чамо вместо совместимых
    #[arg(long)]
    jamo: bool,

    #[arg(long, value_enum, env = "HANGEUL_REPRESENTATION")]
    representation: Option<RepresentationArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RepresentationArg
{
    Hcj,
    Jamo,
}

impl From<RepresentationArg> for Representation
{
    fn from(value: RepresentationArg) -> Self
    {
        match value {
            RepresentationArg::Hcj => Representation::Hcj,
            RepresentationArg::Jamo => Representation::Jamo,
        }
    }
}

impl Codec
{
    /// --jamo важнее --representation и переменной окружения
    fn representation(&self) -> Representation
    {
        match self.jamo {
            true => Representation::Jamo,
            false => self.representation.map(Representation::from).unwrap_or_default(),
        }
    }
}

fn main() -> eyre::Result<()>
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes()).wrap_err("не удалось записать результат")?;
    stdout.flush()?;

    Ok(())
}

fn run(command: Command) -> eyre::Result<String>
{
    Ok(match command {
        Command::Decompose(args) => {
            let representation = args.representation();
            let input = read_input(args.file.as_deref())?;

            tracing::info!(?representation, bytes = input.len(), "decompose");
            decompose(&input, representation)
        }
        Command::Compose(args) => {
            let representation = args.representation();
            let input = read_input(args.file.as_deref())?;

            tracing::info!(?representation, bytes = input.len(), "compose");
            compose(&input, representation)
        }
        Command::Compound { jamo } => match jamo.as_slice() {
            &[compound] => {
                let (first, second) = decompose_compound(compound)?;
                format!("{} {}\n", first, second)
            }
            components => format!("{}\n", compose_compound_slice(components)?),
        },
        Command::Convert { c, role } => {
            let converted = match role {
                Some(role) => hcj_to_jamo_str(c, &role)?,
                None => Jamo::from_positional(c).ok_or(JamoError::InvalidJamo(c))?.hcj(),
            };

            format!("{}\n", converted)
        }
        Command::Inspect { text } => inspect(&text),
    })
}

/// текст из файла или стандартного ввода
fn read_input(file: Option<&Path>) -> eyre::Result<String>
{
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading file");

            fs::read_to_string(path).wrap_err_with(|| format!("не удалось прочитать {}", path.display()))
        }
        _ => {
            tracing::debug!("reading stdin");

            let mut input = String::new();
            io::stdin().read_to_string(&mut input).wrap_err("не удалось прочитать стандартный ввод")?;

            Ok(input)
        }
    }
}

/// строка на символ: символ, кодовая точка, список выполненных свойств
fn inspect(text: &str) -> String
{
    let mut result = String::new();

    for c in text.chars() {
        let properties: Vec<&str> = [
            ("syllable", is_hangul_syllable(c)),
            ("hcj", is_hcj(c)),
            ("jamo", is_jamo(c)),
            ("lead", is_jamo_lead(c)),
            ("vowel", is_jamo_vowel(c)),
            ("tail", is_jamo_tail(c)),
            ("compound", is_jamo_compound(c)),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.then_some(name))
        .collect();

        let properties = match properties.is_empty() {
            true => "-".to_owned(),
            false => properties.join(","),
        };

        // запись в String не возвращает ошибку
        let _ = write!(result, "{}\tU+{:04X}\t{}", c, u32::from(c), properties);

        if let Ok((lead, vowel, tail)) = decompose_syllable(c) {
            let _ = write!(result, "\t{} {} {}", lead, vowel, tail);
        }

        result.push('\n');
    }

    result
}
