use std::fmt;

/// Reason an entity record is not imported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityFlag {
    /// No `Properties`.
    NoEntity,
    /// No `StaticMesh` reference.
    NoMesh,
    /// Mesh reference without an object path.
    NoPath,
    /// Procedural engine primitive with no asset behind it.
    BaseShape,
    /// `bRenderInMainPass` is false.
    NotRendered,
    /// Instanced type without a `PerInstanceSMData` array.
    NoPerInstanceData,
    /// `bVisible` is false. Advisory.
    Invisible,
    /// Created by a user construction script. Advisory.
    BadCreationMethod,
}

impl ValidityFlag {
    pub const ALL: [ValidityFlag; 8] = [
        ValidityFlag::NoEntity,
        ValidityFlag::NoMesh,
        ValidityFlag::NoPath,
        ValidityFlag::BaseShape,
        ValidityFlag::NotRendered,
        ValidityFlag::NoPerInstanceData,
        ValidityFlag::Invisible,
        ValidityFlag::BadCreationMethod,
    ];

    /// Advisory flags are recorded but do not block import.
    pub fn is_advisory(self) -> bool {
        matches!(self, ValidityFlag::Invisible | ValidityFlag::BadCreationMethod)
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }

    pub fn describe(self) -> &'static str {
        match self {
            ValidityFlag::NoEntity => "no properties",
            ValidityFlag::NoMesh => "no static mesh",
            ValidityFlag::NoPath => "no object path",
            ValidityFlag::BaseShape => "basic shape",
            ValidityFlag::NotRendered => "not rendered in main pass",
            ValidityFlag::NoPerInstanceData => "no per-instance data",
            ValidityFlag::Invisible => "invisible",
            ValidityFlag::BadCreationMethod => "created by construction script",
        }
    }
}

/// Set of [`ValidityFlag`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validity(u8);

impl Validity {
    pub fn set(&mut self, flag: ValidityFlag) {
        self.0 |= flag.bit();
    }

    pub fn with(mut self, flag: ValidityFlag) -> Self {
        self.set(flag);
        self
    }

    pub fn contains(&self, flag: ValidityFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn flags(&self) -> impl Iterator<Item = ValidityFlag> + '_ {
        ValidityFlag::ALL
            .into_iter()
            .filter(move |&flag| self.contains(flag))
    }

    /// Flags that block import.
    pub fn blocking(&self) -> impl Iterator<Item = ValidityFlag> + '_ {
        self.flags().filter(|flag| !flag.is_advisory())
    }

    pub fn advisories(&self) -> impl Iterator<Item = ValidityFlag> + '_ {
        self.flags().filter(|flag| flag.is_advisory())
    }

    /// True if any blocking flag is set.
    pub fn is_invalid(&self) -> bool {
        self.blocking().next().is_some()
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("valid");
        }

        for (i, flag) in self.flags().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(flag.describe())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid() {
        let validity = Validity::default();
        assert!(!validity.is_invalid());
        assert_eq!(validity.to_string(), "valid");
    }

    #[test]
    fn advisory_flags_do_not_invalidate() {
        let validity = Validity::default()
            .with(ValidityFlag::Invisible)
            .with(ValidityFlag::BadCreationMethod);

        assert!(!validity.is_invalid());
        assert_eq!(validity.advisories().count(), 2);
    }

    #[test]
    fn every_other_flag_invalidates() {
        for flag in ValidityFlag::ALL.into_iter().filter(|flag| !flag.is_advisory()) {
            let validity = Validity::default().with(flag);
            assert!(validity.is_invalid(), "{flag:?}");
            assert!(validity.contains(flag));
        }
    }

    #[test]
    fn flags_are_independent() {
        let validity = Validity::default()
            .with(ValidityFlag::NoPath)
            .with(ValidityFlag::Invisible);

        assert_eq!(
            validity.flags().collect::<Vec<_>>(),
            [ValidityFlag::NoPath, ValidityFlag::Invisible]
        );
        assert!(!validity.contains(ValidityFlag::NoMesh));
        assert_eq!(validity.to_string(), "no object path, invisible");
    }
}
