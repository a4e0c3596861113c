use cam_helper_rs::cam_helper::registry;
use cam_helper_rs::{RegisterMap, SensorHelper};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

fn benchmark_gain_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gain_encode");

    for name in ["imx258", "imx290", "imx477"] {
        let helper = registry::lookup(name).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &helper, |b, helper| {
            b.iter(|| {
                for i in 0..64 {
                    let gain = 1.0 + (i as f64) * 0.25;
                    black_box(helper.gain_code(black_box(gain)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_decode_status(c: &mut Criterion) {
    let helper = registry::lookup("imx258").unwrap();
    let registers = RegisterMap::from([
        (0x0202, 0x01),
        (0x0203, 0x2C),
        (0x0204, 0x00),
        (0x0205, 0x3C),
        (0x0340, 0x0C),
        (0x0341, 0x2C),
    ]);
    let line_duration = Duration::from_micros(10);

    c.bench_function("decode_status", |b| {
        b.iter(|| {
            black_box(
                helper
                    .decode_status(black_box(&registers), line_duration)
                    .unwrap(),
            )
        });
    });
}

criterion_group!(benches, benchmark_gain_encode, benchmark_decode_status);
criterion_main!(benches);
