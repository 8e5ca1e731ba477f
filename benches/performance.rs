use codemap::core::{CodebaseAnalyzer, ProjectConfig};
use codemap::formatters::{DotFormatter, ReportFormatter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_project(root: &Path, files: usize) {
    fs::write(root.join("tsconfig.json"), "{ \"compilerOptions\": {} }").unwrap();
    let src = root.join("src");
    fs::create_dir_all(&src).unwrap();

    for i in 0..files {
        let next = (i + 1) % files;
        let content = format!(
            r#"
export class Service{i} {{
    constructor(private id: number = {i}) {{}}

    process(): number {{
        return this.calculate() * 2;
    }}

    private calculate(): number {{
        return helper{i}(this.id) + Service{next}.create();
    }}
}}

export function helper{i}(value: number): number {{
    return format{i}(value) + helper{next}(value);
}}

export const format{i} = (value: number) => Math.round(value);
"#
        );
        fs::write(src.join(format!("service_{}.ts", i)), content).unwrap();
    }
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_graph_analysis");

    let small = TempDir::new().unwrap();
    write_project(small.path(), 10);
    let small_config = ProjectConfig::load(&small.path().join("tsconfig.json")).unwrap();

    group.bench_function("small_codebase", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::new();
            let result = analyzer.analyze(black_box(&small_config));
            black_box(result)
        });
    });

    let large = TempDir::new().unwrap();
    write_project(large.path(), 100);
    let large_config = ProjectConfig::load(&large.path().join("tsconfig.json")).unwrap();

    group.bench_function("large_codebase", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::new();
            let result = analyzer.analyze(black_box(&large_config));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let project = TempDir::new().unwrap();
    write_project(project.path(), 100);
    let config = ProjectConfig::load(&project.path().join("tsconfig.json")).unwrap();
    let analysis = CodebaseAnalyzer::new().analyze(&config).unwrap();

    group.bench_function("dot", |b| {
        let formatter = DotFormatter::new().with_source_root(&config.source_root());
        b.iter(|| black_box(formatter.format_graph(black_box(&analysis.graph))));
    });

    group.bench_function("report", |b| {
        let formatter = ReportFormatter::new();
        b.iter(|| black_box(formatter.format_report(black_box(&analysis.graph))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis, benchmark_rendering);
criterion_main!(benches);
