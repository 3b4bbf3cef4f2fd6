use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;

/// результаты бенчмарков (вывод criterion) в виде CSV: строки - тексты, столбцы - варианты
#[derive(Parser)]
struct Args
{
    /// файл с выводом `cargo bench`
    file: PathBuf,

    /// группы бенчмарков
    #[arg(long, value_delimiter = ',', default_value = "decompose,compose")]
    groups: Vec<String>,
}

/// время по ключу "группа/вариант/текст", в наносекундах
type Timings = BTreeMap<String, f64>;

fn main() -> eyre::Result<()>
{
    let args = Args::parse();

    let contents = fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("не удалось прочитать {}", args.file.display()))?;

    let timings = parse_str(&contents);

    for group in args.groups.iter() {
        println!("{}:\n{}\n", group.to_uppercase(), make_csv(&timings, group));
    }

    Ok(())
}

fn make_csv(timings: &Timings, group: &str) -> String
{
    let (texts, variants) = get_rows_cols(timings, group);

    let mut result = String::new();

    for variant in variants.iter() {
        result.push_str(&format!(";{}", variant));
    }
    result.push('\n');

    for text in texts.iter() {
        result.push_str(text);

        for variant in variants.iter() {
            let value = timings
                .get(&format!("{}/{}/{}", group, variant, text))
                .copied()
                .unwrap_or_default();

            result.push_str(&format!(";{:.0}", value));
        }

        result.push('\n');
    }

    result
}

/// строки вида "decompose/hcj/korean   time:   [1.0100 µs 1.0200 µs 1.0300 µs]"
fn parse_str(source: &str) -> Timings
{
    let mut result = Timings::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" || parts[0].split('/').count() != 3 {
            continue;
        }

        // среднее из трёх оценок
        let Ok(time) = parts[4].parse::<f64>() else {
            continue;
        };

        let scale = match parts[5] {
            "ps" => 0.001,
            "ns" => 1.0,
            "µs" | "us" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            _ => continue,
        };

        result.insert(parts[0].to_owned(), time * scale);
    }

    result
}

fn get_rows_cols(timings: &Timings, group: &str) -> (BTreeSet<String>, BTreeSet<String>)
{
    let mut texts = BTreeSet::new();
    let mut variants = BTreeSet::new();

    for key in timings.keys() {
        let parts: Vec<&str> = key.split('/').collect();

        if parts[0] != group {
            continue;
        }

        variants.insert(parts[1].to_owned());
        texts.insert(parts[2].to_owned());
    }

    (texts, variants)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn csv()
    {
        let output = "\
decompose/hcj/korean    time:   [1.0000 µs 2.0000 µs 3.0000 µs]
                        thrpt:  [1.0 GiB/s 1.1 GiB/s 1.2 GiB/s]
decompose/jamo/korean   time:   [100.00 ns 200.00 ns 300.00 ns]
compose/hcj/mixed       time:   [1.0000 ms 1.5000 ms 2.0000 ms]
";
        let timings = parse_str(output);

        assert_eq!(timings.len(), 3);
        assert_eq!(make_csv(&timings, "decompose"), ";hcj;jamo\nkorean;2000;200\n");
        assert_eq!(make_csv(&timings, "compose"), ";hcj\nmixed;1500000\n");
    }
}
