use std::fmt;

/// Physical state of an [`Atom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtomicState {
    #[default]
    Unknown,
    Solid,
    Liquid,
    Gas,
    Plasma,
}

impl fmt::Display for AtomicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtomicState::Unknown => "unknown",
            AtomicState::Solid => "solid",
            AtomicState::Liquid => "liquid",
            AtomicState::Gas => "gas",
            AtomicState::Plasma => "plasma",
        };
        f.write_str(name)
    }
}

/// Sample record stored in the demo sequences.
///
/// Equality compares every field; floating point fields compare by total
/// order, so `NaN` equals `NaN` and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
pub struct Atom {
    pub name: String,
    pub number: u32,
    pub state: AtomicState,
    pub mass: f64,
    pub density: f64,
    pub melting_point: f64,
}

impl Atom {
    /// An atom with the given name and zeroed properties.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            number: 0,
            state: AtomicState::Unknown,
            mass: 0.0,
            density: 0.0,
            melting_point: 0.0,
        }
    }

    #[must_use]
    pub fn new(
        name: &str,
        number: u32,
        state: AtomicState,
        mass: f64,
        density: f64,
        melting_point: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            number,
            state,
            mass,
            density,
            melting_point,
        }
    }
}

impl Default for Atom {
    fn default() -> Self {
        Self::named("atom")
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
            && self.mass.total_cmp(&other.mass).is_eq()
            && self.density.total_cmp(&other.density).is_eq()
            && self.melting_point.total_cmp(&other.melting_point).is_eq()
            && self.name == other.name
            && self.state == other.state
    }
}

impl Eq for Atom {}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, {}, {:?}, {:?}, {:?}",
            self.name, self.number, self.state, self.mass, self.density, self.melting_point
        )
    }
}
