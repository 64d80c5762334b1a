use criterion::{Criterion, criterion_group, criterion_main};
use gen_sources::SourcesConfig;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn create_test_tree(file_count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for i in 0..file_count {
        let dir = root.join("src").join(format!("mod_{}", i % 7)).join(format!("sub_{}", i % 3));
        std::fs::create_dir_all(&dir).unwrap();

        let name = match i % 4 {
            0 => format!("unit_{}.cpp", i),
            1 => format!("unit_{}.c", i),
            2 => format!("unit_{}.cc", i),
            _ => format!("unit_{}.h", i),
        };

        let mut file = File::create(dir.join(name)).unwrap();
        writeln!(file, "int value_{} = {};", i, i).unwrap();
    }

    temp_dir
}

fn full_scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    group.sample_size(20);

    for count in [100, 1_000, 5_000] {
        let tree = create_test_tree(count);
        let config = SourcesConfig {
            base_dir: tree.path().to_path_buf(),
            ..Default::default()
        };

        group.bench_function(format!("{}_files", count), |b| {
            b.iter(|| gen_sources::run(&config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, full_scan_benchmark);
criterion_main!(benches);
