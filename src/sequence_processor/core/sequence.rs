use bio::io::fastq;

/// One FASTQ record, owned so processors can hold on to it if they need to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub desc: Option<String>,
    pub data: Vec<u8>,
    pub quality: Vec<u8>,
}

impl From<&fastq::Record> for Sequence {
    fn from(record: &fastq::Record) -> Self {
        Sequence {
            id: record.id().to_string(),
            desc: record.desc().map(str::to_string),
            data: record.seq().to_vec(),
            quality: record.qual().to_vec(),
        }
    }
}
