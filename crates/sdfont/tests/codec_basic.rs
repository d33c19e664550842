use pretty_assertions::assert_eq;
use sdfont::codec::{decode, encode, quantize, RunRecord};

#[test]
fn pairs_two_distinct_runs_in_one_record() {
    // Quantized levels [0,0,0,12,12]: both runs land in a single record
    let records = encode(&[10, 10, 10, 200, 200]);
    assert_eq!(
        records,
        vec![RunRecord {
            levels: 0x0C,
            count1: 3,
            count2: 2,
        }]
    );
    assert_eq!(decode(&records), vec![0, 0, 0, 192, 192]);
}

#[test]
fn run_longer_than_cap_splits() {
    let samples = vec![0xFFu8; 300];
    let records = encode(&samples);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].count1, 255);
    assert_eq!(records[0].count2, 45);
    assert_eq!(records[0].level1(), 15);
    assert_eq!(records[0].level2(), 15);
    assert_eq!(decode(&records).len(), 300);
}

#[test]
fn single_sample_is_one_unpaired_record() {
    let records = encode(&[0xAB]);
    assert_eq!(
        records,
        vec![RunRecord {
            levels: 0xA0,
            count1: 1,
            count2: 0,
        }]
    );
    assert_eq!(decode(&records), vec![0xA0]);
}

#[test]
fn trailing_unpaired_run_has_zero_low_nibble() {
    // Three runs: the last record carries only the third
    let records = encode(&[0x10, 0x20, 0x30]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].count2, 0);
    assert_eq!(records[1].level2(), 0);
}

#[test]
fn empty_input_encodes_to_nothing() {
    assert!(encode(&[]).is_empty());
    assert!(decode(&[]).is_empty());
}

#[test]
fn round_trip_recovers_quantized_samples() {
    // Deterministic pseudo-random buffer, varied run lengths
    let mut state = 0x2545F491u32;
    let samples: Vec<u8> = (0..2048)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8
        })
        .collect();
    let decoded = decode(&encode(&samples));
    assert_eq!(decoded.len(), samples.len());
    for (out, input) in decoded.iter().zip(&samples) {
        assert_eq!(*out, quantize(*input) << 4);
    }
}

#[test]
fn decoded_length_matches_input_length() {
    for len in [1usize, 2, 254, 255, 256, 511, 1000] {
        let samples: Vec<u8> = (0..len).map(|i| (i / 7) as u8).collect();
        let records = encode(&samples);
        assert_eq!(
            decode(&records).len(),
            len,
            "length mismatch for input of {len}"
        );
        let counted: usize = records.iter().map(|r| r.sample_count()).sum();
        assert_eq!(counted, len);
    }
}

#[test]
fn encoding_is_deterministic() {
    let samples: Vec<u8> = (0..512).map(|i| (i % 256) as u8).collect();
    assert_eq!(encode(&samples), encode(&samples));
}

#[test]
fn count_invariants_hold() {
    let samples: Vec<u8> = (0..777).map(|i| ((i * 13) % 256) as u8).collect();
    let records = encode(&samples);
    for record in &records {
        assert!(record.count1 >= 1);
    }
    for record in &records[..records.len() - 1] {
        assert!(record.count2 >= 1, "count2 may be 0 only on the last record");
    }
}

#[test]
fn wire_form_is_three_bytes_per_record() {
    let record = RunRecord {
        levels: 0x5A,
        count1: 7,
        count2: 3,
    };
    assert_eq!(record.to_bytes(), [0x5A, 7, 3]);
    assert_eq!(RunRecord::from_bytes([0x5A, 7, 3]), record);
    assert_eq!(record.level1(), 5);
    assert_eq!(record.level2(), 10);
}
