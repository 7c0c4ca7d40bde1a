#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::Algorithm;

fuzz_target!(|data: &[u8]| {
    let Some((&algo_byte, data)) = data.split_first() else {
        return;
    };

    let algorithm = Algorithm::ALL[algo_byte as usize % Algorithm::ALL.len()];

    let mut v = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect::<Vec<_>>();

    if matches!(algorithm, Algorithm::Slowsort | Algorithm::Stooge) && v.len() > 32 {
        return;
    }

    let mut expected = v.clone();
    expected.sort();

    algorithm.sort(&mut v);
    assert_eq!(v, expected);
});
