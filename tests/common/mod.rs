// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic pseudo-random bases (xorshift64), so fixtures need no files.
pub fn random_bases(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"ACGT"[(state >> 60) as usize & 3]
        })
        .collect()
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            _ => b'N',
        })
        .collect()
}

pub fn fastq_entry(id: &str, seq: &[u8]) -> String {
    format!(
        "@{}\n{}\n+\n{}\n",
        id,
        String::from_utf8_lossy(seq),
        "5".repeat(seq.len())
    )
}

pub struct Fixture {
    pub reference: PathBuf,
    /// FASTQ with two contaminant reads (`lambda_fwd`, `lambda_rev`)
    /// between two unrelated ones (`human_1`, `human_2`).
    pub reads: String,
    pub clean_reads: String,
}

pub fn write_fixture(dir: &Path) -> Fixture {
    let genome = random_bases(0x5eed_1a3b_da00_0001, 8000);
    let reference = dir.join("lambda.fasta");
    let mut fasta = String::from(">lambda\n");
    for line in genome.chunks(80) {
        fasta.push_str(&String::from_utf8_lossy(line));
        fasta.push('\n');
    }
    fs::write(&reference, fasta).unwrap();

    let human_1 = fastq_entry("human_1", &random_bases(0xdead_beef_0000_0042, 1500));
    let lambda_fwd = fastq_entry("lambda_fwd", &genome[1000..2500]);
    let lambda_rev = fastq_entry("lambda_rev", &reverse_complement(&genome[4000..5200]));
    let human_2 = fastq_entry("human_2", &random_bases(0x0123_4567_89ab_cdef, 1200));

    Fixture {
        reference,
        reads: format!("{}{}{}{}", human_1, lambda_fwd, lambda_rev, human_2),
        clean_reads: format!("{}{}", human_1, human_2),
    }
}

/// Write `data` gzip-compressed to `path`.
pub fn write_gzip(path: &Path, data: &[u8]) {
    use std::io::Write;

    let mut writer = niffler::to_path(path, niffler::Format::Gzip, niffler::Level::Six)
        .expect("open gzip writer");
    writer.write_all(data).unwrap();
    writer.flush().unwrap();
    // Dropping the encoder writes the gzip trailer.
    drop(writer);
}
