#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::{erased, Algorithm};

fuzz_target!(|data: &[u8]| {
    let Some((&[algo_byte, size_byte], data)) = data.split_first_chunk::<2>() else {
        return;
    };

    let algorithm = Algorithm::ALL[algo_byte as usize % Algorithm::ALL.len()];
    let element_size = (size_byte as usize % 8) + 1;
    let count = data.len() / element_size;

    let len_limit = match algorithm {
        Algorithm::Slowsort => 24,
        Algorithm::Stooge => 64,
        _ => usize::MAX,
    };
    if count > len_limit {
        return;
    }

    let mut buffer = data.to_vec();
    erased::sort_bytes(algorithm, &mut buffer, count, element_size, |a, b| a.cmp(b))
        .expect("geometry derived from the input is always valid");

    let used = count * element_size;
    assert_eq!(buffer[used..], data[used..]);

    let mut sorted_chunks = buffer[..used].chunks_exact(element_size).collect::<Vec<_>>();
    assert!(sorted_chunks.windows(2).all(|w| w[0] <= w[1]));

    let mut original_chunks = data[..used].chunks_exact(element_size).collect::<Vec<_>>();
    original_chunks.sort();
    sorted_chunks.sort();
    assert_eq!(original_chunks, sorted_chunks);
});
