//! World files: a portalized BSP tree plus its packed leaf PVS.
//!
//! Layout: the magic `PVSW`, the format version as little-endian `u32`, then
//! the bincode encoding of [`World`].

use crate::bsp::BspTree;
use crate::errors::WorldError;
use crate::pvs::BitMatrix;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const MAGIC: [u8; 4] = *b"PVSW";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub tree: BspTree,
    /// Packed leaf PVS as produced by [`crate::assemble::assemble_pvs`], or
    /// empty if none was computed yet.
    pub pvs: Vec<u32>,
}

impl World {
    pub const fn new(tree: BspTree) -> Self {
        Self {
            tree,
            pvs: Vec::new(),
        }
    }

    /// Loads and validates a world file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, WorldError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(WorldError::BadMagic(magic));
        }

        let mut version = [0u8; 4];
        reader.read_exact(&mut version)?;
        let version = u32::from_le_bytes(version);
        if version != FORMAT_VERSION {
            return Err(WorldError::UnsupportedVersion(version));
        }

        let world: World = bincode::deserialize_from(reader)?;
        world.tree.validate()?;
        Ok(world)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WorldError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), WorldError> {
        writer.write_all(&MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Replaces the stored PVS.
    pub fn store_pvs(&mut self, pvs: &BitMatrix) {
        self.pvs = pvs.words().to_vec();
    }

    /// The stored PVS, if there is one that fits the leaf count.
    pub fn pvs_matrix(&self) -> Option<BitMatrix> {
        if self.pvs.is_empty() {
            return None;
        }
        BitMatrix::from_words(self.tree.leaf_count(), self.pvs.clone())
    }
}
