pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// папка с текстами для бенчмарков
pub const TEXTS: &str = "./../test_data/texts";
/// короткие тексты повторяются, чтобы время замера не тонуло в накладных расходах
pub const REPEAT: usize = 16;

/// группа бенчмарков по всем текстам:
/// $prepare готовит входные данные из текста, $transform - измеряемое преобразование
#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $name: expr, $prepare: expr, $transform: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let transform = $transform;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::read_dir(group::TEXTS) {
                let source: String = $prepare(text.as_str());

                group.throughput(criterion::Throughput::Bytes(source.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    source.as_str(),
                    |b, source| b.iter(|| transform(criterion::black_box(source))),
                );
            }

            group.finish();
        }
    };
}

/// тексты из папки: (название файла без расширения, содержимое, повторённое REPEAT раз)
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .map(|path| {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let text = std::fs::read_to_string(&path).unwrap().repeat(REPEAT);

            (name, text)
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}
