use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigInt;

use swap_quoter::benchmark::SyntheticInputs;
use swap_quoter::quoter::ConstantProductCalculator;
use swap_quoter::benchmark::runner::run_workload;
use swap_quoter::utils::config::BenchmarkConfig;
use swap_quoter::utils::math::get_amount_out;

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

fn bench_single_quote(c: &mut Criterion) {
    let mut g = c.benchmark_group("quote");
    g.warm_up_time(Duration::from_secs(2));
    g.measurement_time(Duration::from_secs(5));
    g.throughput(Throughput::Elements(1));

    let cases: [(&str, BigInt, BigInt, BigInt); 4] = [
        ("wad_small", pow10(18), pow10(18) * 2u32, BigInt::from(100)),
        ("wad_large_in", pow10(18), pow10(18) * 2u32, pow10(17)),
        ("e30", pow10(30), pow10(30) * 3u32, pow10(27)),
        ("insufficient", BigInt::from(0), pow10(18), BigInt::from(100)),
    ];

    for (label, reserve_in, reserve_out, amount_in) in &cases {
        g.bench_function(*label, |b| {
            b.iter(|| {
                black_box(get_amount_out(
                    black_box(reserve_in),
                    black_box(reserve_out),
                    black_box(amount_in),
                ))
            });
        });
    }
    g.finish();
}

fn bench_workload(c: &mut Criterion) {
    let mut g = c.benchmark_group("workload");
    g.sample_size(20);

    let calculator = ConstantProductCalculator::default();
    for iterations in [1_000u64, 10_000, 100_000] {
        let config = BenchmarkConfig {
            iterations,
            ..BenchmarkConfig::default()
        };
        g.throughput(Throughput::Elements(SyntheticInputs::new(&config).len() as u64));
        g.bench_with_input(BenchmarkId::from_parameter(iterations), &config, |b, config| {
            b.iter(|| black_box(run_workload(&calculator, config)));
        });
    }
    g.finish();
}

criterion_group!(benches, bench_single_quote, bench_workload);
criterion_main!(benches);
