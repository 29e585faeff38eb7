use crate::error::NanolyseError;
use anyhow::Result;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Answers a single question about a read: does it align to the contaminant?
pub trait HitDetector {
    fn has_hit(&self, sequence: &[u8]) -> Result<bool>;
}

/// minimap2 presets that make sense for screening reads against a small
/// contaminant genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignerPreset {
    #[default]
    MapOnt,
    MapPb,
    MapHifi,
    Sr,
    Asm5,
    Asm10,
    Asm20,
}

impl AlignerPreset {
    fn to_minimap2(self) -> minimap2::Preset {
        match self {
            AlignerPreset::MapOnt => minimap2::Preset::MapOnt,
            AlignerPreset::MapPb => minimap2::Preset::MapPb,
            AlignerPreset::MapHifi => minimap2::Preset::MapHifi,
            AlignerPreset::Sr => minimap2::Preset::Sr,
            AlignerPreset::Asm5 => minimap2::Preset::Asm5,
            AlignerPreset::Asm10 => minimap2::Preset::Asm10,
            AlignerPreset::Asm20 => minimap2::Preset::Asm20,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlignerPreset::MapOnt => "map-ont",
            AlignerPreset::MapPb => "map-pb",
            AlignerPreset::MapHifi => "map-hifi",
            AlignerPreset::Sr => "sr",
            AlignerPreset::Asm5 => "asm5",
            AlignerPreset::Asm10 => "asm10",
            AlignerPreset::Asm20 => "asm20",
        }
    }
}

impl FromStr for AlignerPreset {
    type Err = NanolyseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map-ont" => Ok(AlignerPreset::MapOnt),
            "map-pb" => Ok(AlignerPreset::MapPb),
            "map-hifi" => Ok(AlignerPreset::MapHifi),
            "sr" => Ok(AlignerPreset::Sr),
            "asm5" => Ok(AlignerPreset::Asm5),
            "asm10" => Ok(AlignerPreset::Asm10),
            "asm20" => Ok(AlignerPreset::Asm20),
            other => Err(NanolyseError::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for AlignerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// minimap2 index over the contaminant reference, built once per run.
pub struct ContaminantIndex {
    aligner: minimap2::Aligner<minimap2::Built>,
    reference: PathBuf,
    preset: AlignerPreset,
}

impl ContaminantIndex {
    pub fn build(reference: &Path, preset: AlignerPreset) -> Result<Self> {
        if !reference.is_file() {
            return Err(NanolyseError::ReferenceNotFound {
                searched: vec![reference.to_path_buf()],
            }
            .into());
        }

        let aligner = minimap2::Aligner::builder()
            .preset(preset.to_minimap2())
            .with_index(reference, None)
            .map_err(|e| NanolyseError::IndexBuild {
                reference: reference.to_path_buf(),
                message: e.to_string(),
            })?;

        info!("Built {} index from {}", preset, reference.display());

        Ok(Self {
            aligner,
            reference: reference.to_path_buf(),
            preset,
        })
    }

    pub fn reference(&self) -> &Path {
        &self.reference
    }

    pub fn preset(&self) -> AlignerPreset {
        self.preset
    }
}

impl HitDetector for ContaminantIndex {
    fn has_hit(&self, sequence: &[u8]) -> Result<bool> {
        if sequence.is_empty() {
            return Ok(false);
        }

        let mappings = self
            .aligner
            .map(sequence, false, false, None, None, None)
            .map_err(|e| NanolyseError::Alignment(e.to_string()))?;

        Ok(!mappings.is_empty())
    }
}
