//! Concurrency tests
//!
//! Conversions hold no shared state, so a buffer split at block boundaries
//! can be converted on independent tasks and reassembled in order.

use pcm_codec_core::{pack, unpack, FormatDescriptor};

const TASKS: usize = 8;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_split_unpack_matches_whole() {
    let format = FormatDescriptor::pcm_s24_be();
    let width = format.bytes_per_sample();

    let samples: Vec<f32> = (0..10_000).map(|i| ((i as f32) * 0.003).sin() * 0.9).collect();
    let bytes = pack(&samples, samples.len(), &format).unwrap();
    let whole = unpack(&bytes, bytes.len(), &format).unwrap();

    let blocks_per_task = (samples.len() + TASKS - 1) / TASKS;
    let mut handles = Vec::new();

    for chunk in bytes.chunks(blocks_per_task * width) {
        let chunk = chunk.to_vec();
        handles.push(tokio::task::spawn_blocking(move || {
            unpack(&chunk, chunk.len(), &format)
        }));
    }

    let mut reassembled = Vec::with_capacity(whole.len());
    for handle in handles {
        reassembled.extend(handle.await.unwrap().unwrap());
    }

    assert_eq!(reassembled, whole);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_on_same_input_agree() {
    let format = FormatDescriptor::alaw();
    let samples: Vec<f32> = (0..4000).map(|i| ((i as f32) * 0.05).cos() * 0.6).collect();
    let expected = pack(&samples, samples.len(), &format).unwrap();

    let mut handles = Vec::new();
    for _ in 0..TASKS {
        let samples = samples.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            pack(&samples, samples.len(), &format)
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), expected);
    }
}
