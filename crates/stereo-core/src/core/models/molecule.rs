use super::atom::Atom;
use super::ids::AtomId;
use crate::core::stereo::resolver::SubstituentResolver;
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("An atom with identifier '{id}' already exists")]
    DuplicateAtomId { id: String },
}

/// A set of atoms addressable both by stable key and by identifier string.
///
/// This is the collaborator that parity records resolve their substituent identifiers
/// against, and the coordinate source for geometry-derived parities.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Lookup map from the atom's identifier string to its key.
    id_map: HashMap<String, AtomId>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::DuplicateAtomId`] if an atom with the same identifier
    /// is already present; the molecule is left unchanged.
    pub fn add_atom(&mut self, atom: Atom) -> Result<AtomId, MoleculeError> {
        if self.id_map.contains_key(&atom.id) {
            return Err(MoleculeError::DuplicateAtomId { id: atom.id });
        }
        let id = atom.id.clone();
        let key = self.atoms.insert(atom);
        self.id_map.insert(id, key);
        Ok(key)
    }

    /// Removes the atom with identifier `id`, returning it if it was present.
    pub fn remove_atom(&mut self, id: &str) -> Option<Atom> {
        let key = self.id_map.remove(id)?;
        self.atoms.remove(key)
    }

    pub fn atom(&self, key: AtomId) -> Option<&Atom> {
        self.atoms.get(key)
    }

    pub fn atom_mut(&mut self, key: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(key)
    }

    pub fn atom_id(&self, id: &str) -> Option<AtomId> {
        self.id_map.get(id).copied()
    }

    pub fn atom_by_ref(&self, id: &str) -> Option<&Atom> {
        self.atom_id(id).and_then(|key| self.atoms.get(key))
    }

    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl SubstituentResolver for Molecule {
    type Substituent = Atom;

    fn lookup(&self, id: &str) -> Option<&Atom> {
        self.atom_by_ref(id)
    }
}
