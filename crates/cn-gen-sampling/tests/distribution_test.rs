mod common;

use cn_gen_sampling::Sample;

#[test]
fn test_uniform_covers_range_evenly() {
    let mut stream = common::seeded_stream(17);
    let mut counts = [0u32; 10];

    for _ in 0..10_000 {
        let value: u8 = stream.uniform(9);
        counts[usize::from(value)] += 1;
    }

    for (value, count) in counts.iter().enumerate() {
        assert!(
            (850..=1150).contains(count),
            "value {value} drawn {count} times"
        );
    }
}

#[test]
fn test_uniform_chi_square_is_plausible() {
    let mut stream = common::seeded_stream(23);
    let mut counts = [0u32; 16];
    let trials = 16_000;

    for _ in 0..trials {
        let value: u16 = stream.uniform(15);
        counts[usize::from(value)] += 1;
    }

    let expected = f64::from(trials) / 16.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&count| (f64::from(count) - expected).powi(2) / expected)
        .sum();
    // 15 degrees of freedom; p = 0.0001 critical value is about 42.6.
    assert!(chi_square < 42.6, "chi-square {chi_square}");
}

#[test]
fn test_uniform_respects_every_byte_bound() {
    let mut stream = common::seeded_stream(29);

    for bound in 0..=u8::MAX {
        let upper = i16::from(bound) / 2;
        let lower = upper - i16::from(bound);
        for _ in 0..64 {
            let unsigned: u8 = stream.uniform(bound);
            assert!(unsigned <= bound, "{unsigned} above bound {bound}");

            let signed: i8 = stream.uniform(bound);
            assert!(
                (lower..=upper).contains(&i16::from(signed)),
                "{signed} outside [{lower}, {upper}] for bound {bound}"
            );
        }
    }
}

#[test]
fn test_signed_uniform_hits_both_extremes() {
    let mut stream = common::seeded_stream(4);
    let values: Vec<i8> = (0..5_000).map(|_| stream.uniform(255)).collect();

    assert!(values.contains(&i8::MIN));
    assert!(values.contains(&i8::MAX));
}

#[test]
fn test_range_stays_inside_bounds() {
    let mut stream = common::seeded_stream(12);

    for (min, max) in [(-5i32, 5), (0, 0), (i32::MIN, i32::MIN + 3), (i32::MAX - 2, i32::MAX)] {
        for _ in 0..200 {
            let value = stream.range(min, max).unwrap();
            assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
        }
    }
}

#[test]
fn test_lt_and_ge_respect_bounds() {
    let mut stream = common::seeded_stream(6);

    for _ in 0..500 {
        assert!(stream.lt(3u64).unwrap() < 3);
        assert!(stream.lt(-100i16).unwrap() < -100);
        assert!(stream.ge(250u8) >= 250);
        assert!(stream.ge(i64::MAX - 1) >= i64::MAX - 1);
    }
}

#[test]
fn test_mult_values_are_exact_multiples() {
    let mut stream = common::seeded_stream(21);

    for _ in 0..500 {
        assert_eq!(stream.mult(12u32).unwrap() % 12, 0);
        assert_eq!(stream.mult(-7i64).unwrap() % 7, 0);

        let ranged = stream.mult_range(-100i16, 100, 15).unwrap();
        assert_eq!(ranged % 15, 0);
        assert!((-100..=100).contains(&ranged));
    }
}

#[test]
fn test_uniform_sized_shrinks_with_size() {
    let mut stream = common::seeded_stream(10);

    stream.set_size(10);
    for _ in 0..500 {
        let value: u32 = stream.uniform_sized(1_000);
        assert!(value <= 100);
    }

    stream.set_size(0);
    for _ in 0..50 {
        assert_eq!(stream.uniform_sized::<i64>(u64::MAX), 0);
    }
}

#[test]
fn test_retry_signal_tracks_rejections() {
    let mut stream = common::seeded_stream(2);

    // Draw until an even byte appears, counting each rejection as a retry.
    let mut value: u8 = stream.uniform(255);
    while value % 2 != 0 {
        stream.rand_retry();
        value = stream.uniform(255);
    }

    assert_eq!(stream.retries(), u64::try_from(stream.len() - 1).unwrap());
    assert!(!stream.retries_exhausted());
}
