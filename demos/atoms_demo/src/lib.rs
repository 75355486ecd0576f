//! Numbered walk-through of the `atoms` API over a sequence of optional
//! [`Atom`] records.
//!
//! Each step prints a header followed by the sequence contents, one element
//! per line, with a placeholder standing in for absent elements.

mod atom;

use std::io::Write;

use atoms::{Atoms, AtomsError, GrowthStrategy};
use thiserror::Error;

pub use atom::{Atom, AtomicState};

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("atoms operation failed: {0}")]
    Atoms(#[from] AtomsError),
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Text printed for absent elements
    pub placeholder: String,
    /// Growth strategy of the main demo sequence
    pub strategy: GrowthStrategy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            placeholder: String::from("null"),
            strategy: GrowthStrategy::Amortized,
        }
    }
}

const RULE: &str =
    "----------------------------------------------------------------------------";

struct Demo<'a, W: Write> {
    out: &'a mut W,
    placeholder: &'a str,
}

impl<W: Write> Demo<'_, W> {
    fn section(&mut self, step: u32, title: &str) -> Result<(), DemoError> {
        log::debug!("demo step {step}: {title}");
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "<{step}> {title}")?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn print(&mut self, atoms: &Atoms<Option<Atom>>) -> Result<(), DemoError> {
        for line in atoms.lines(self.placeholder) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn render(&self, atom: &Option<Atom>) -> String {
        match atom {
            Some(atom) => atom.to_string(),
            None => self.placeholder.to_string(),
        }
    }
}

fn found(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("replaced at {index}"),
        None => String::from("not found"),
    }
}

fn has_name(atom: &Option<Atom>, name: &str) -> bool {
    atom.as_ref().is_some_and(|atom| atom.name == name)
}

fn named(name: &str) -> Option<Atom> {
    Some(Atom::named(name))
}

/// The three atoms the demo bulk-adds from a plain collection.
#[must_use]
pub fn sample_additions() -> Vec<Option<Atom>> {
    vec![
        Some(Atom::new("added1", 4, AtomicState::Liquid, 4.0, 53.0, 63.0)),
        Some(Atom::new("added2", 8, AtomicState::Gas, 0.3, 2.0, 33.0)),
        Some(Atom::new("added3", 1254, AtomicState::Plasma, -14.0, 543.0, 2.0)),
    ]
}

/// Runs every demo step, writing the report to `out`.
///
/// # Errors
///
/// Returns `DemoError::Io` if writing fails, or `DemoError::Atoms` if a
/// positional operation is rejected.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<(), DemoError> {
    let to_add = sample_additions();
    let mut demo = Demo {
        out,
        placeholder: &config.placeholder,
    };

    demo.section(0, "[ = = = Atoms Demo = = = ]")?;

    demo.section(1, "[Empty constructor]")?;
    demo.print(&Atoms::new())?;

    demo.section(2, "[Empty constructor with a initial capacity of 5]")?;
    demo.print(&Atoms::with_capacity(5))?;

    demo.section(3, "[Array constructor]")?;
    demo.print(&Atoms::from([named("atom1"), named("atom2")]))?;

    demo.section(4, "[Collection constructor]")?;
    demo.print(&Atoms::from(to_add.clone()))?;

    demo.section(5, "[Atoms constructor]")?;
    demo.print(&Atoms::from([named("a"), named("b")]).clone())?;

    demo.section(6, "Arbitrary number of arguments constructor")?;
    let mut atoms = Atoms::with_strategy(config.strategy);
    atoms.add_all([
        Some(Atom::default()),
        Some(Atom::new("x", 4, AtomicState::Plasma, 4.0, 4.0, 3.0)),
        Some(Atom::new("y", 35, AtomicState::Gas, 13.0, 5.0, 35.0)),
        named("x"),
        Some(Atom::new("y", 23, AtomicState::Unknown, 34.0, 2.0, 51.0)),
        named("x"),
        named("y"),
        named("x"),
        named("y"),
        None,
        None,
    ]);
    demo.print(&atoms)?;

    demo.section(7, &format!("Size : {}", atoms.len()))?;

    let removed = atoms.remove_if(|atom| has_name(atom, "y"));
    demo.section(8, &format!("Removing atoms if their name is 'y' : {removed}"))?;
    demo.print(&atoms)?;

    let second = demo.render(atoms.get(1)?);
    demo.section(9, &format!("Retrieving the 2nd element : {second}"))?;

    let replaced = atoms.replace_last(&named("XX"), named("Y"));
    demo.section(
        10,
        &format!("Replacing the last empty XX with Y : {}", found(replaced)),
    )?;
    demo.print(&atoms)?;

    let replaced = atoms.replace_first(&named("x"), named("XX"));
    demo.section(
        11,
        &format!("Replacing the first empty x with XX : {}", found(replaced)),
    )?;
    demo.print(&atoms)?;

    let replaced = atoms.replace_all(&named("x"), named("XX"));
    demo.section(
        12,
        &format!("Replacing all empty 'x' atoms with 'XX' : {replaced}"),
    )?;
    demo.print(&atoms)?;

    let removed = atoms.remove_item(&named("XX"));
    demo.section(13, &format!("Removing the first empty XX : {removed}"))?;
    demo.print(&atoms)?;

    let removed = atoms.remove_last_item(&named("YY"));
    demo.section(14, &format!("Removing the last empty YY : {removed}"))?;
    demo.print(&atoms)?;

    demo.section(15, "Removing the last element")?;
    atoms.remove_last();
    demo.print(&atoms)?;

    let contains = atoms.contains(&named("XX"));
    demo.section(16, &format!("Contains an empty XX : {contains}"))?;

    let count = atoms.count(&named("XX"));
    demo.section(17, &format!("Count of the empty XX : {count}"))?;

    demo.section(18, "Adding an empty X")?;
    atoms.add(named("X"));
    demo.print(&atoms)?;

    demo.section(19, "Adding the list to itself at index 1")?;
    let copy = atoms.to_vec();
    atoms.insert_all(1, copy)?;
    demo.print(&atoms)?;

    let count = atoms.count(&None);
    demo.section(20, &format!("Count of null elements : {count}"))?;

    let count = atoms.count_if(|atom| has_name(atom, "XX"));
    demo.section(
        21,
        &format!("Count of elements with the name 'XX' : {count}"),
    )?;

    let removed = atoms.remove_all(&None);
    demo.section(22, &format!("Removing all null elements : {removed}"))?;
    demo.print(&atoms)?;

    let removed = atoms.remove_if(|atom| {
        atom.as_ref()
            .is_some_and(|atom| atom.name.to_lowercase().starts_with('x'))
    });
    demo.section(
        23,
        &format!("Removing atoms if their name starts with any case 'x' : {removed}"),
    )?;
    demo.print(&atoms)?;

    demo.section(24, "Adding all atoms to the list")?;
    let copy = atoms.to_vec();
    atoms.add_all(copy);
    demo.print(&atoms)?;

    demo.section(25, "Clearing")?;
    atoms.clear();

    demo.section(26, &format!("isEmpty : {}", atoms.is_empty()))?;
    demo.print(&atoms)?;

    demo.section(27, "Adding a new X atom")?;
    atoms.add(Some(Atom::new("X", 5, AtomicState::Solid, 50.0, 23.0, 536.0)));
    demo.print(&atoms)?;

    demo.section(28, &format!("isEmpty : {}", atoms.is_empty()))?;
    demo.print(&atoms)?;

    demo.section(29, "Bulk adding an array - x1, x2, x3")?;
    atoms.add_all([named("x1"), named("x2"), named("x3")]);
    demo.print(&atoms)?;

    demo.section(30, "Bulk adding a collection - added1, added2, added3")?;
    atoms.add_all(to_add.iter().cloned());
    demo.print(&atoms)?;

    let previous = atoms.set(3, named("X"))?;
    let previous = demo.render(&previous);
    demo.section(
        31,
        &format!("Setting the 3rd element to an empty X : {previous}"),
    )?;
    demo.print(&atoms)?;

    demo.section(32, "Add an empty ZERO atom at index 0")?;
    atoms.insert(0, named("ZERO"))?;
    demo.print(&atoms)?;

    demo.section(33, "Bulk adding a collection at index 0")?;
    atoms.insert_all(0, to_add)?;
    demo.print(&atoms)?;

    demo.section(34, "The elements between the indexes 1-6 :")?;
    demo.print(&atoms.sub_list(1, 6)?)?;

    demo.section(35, "Replacing all names with edited")?;
    atoms.for_each_mut(|atom| {
        if let Some(atom) = atom {
            atom.name = String::from("edited");
        }
    });
    demo.print(&atoms)?;

    demo.section(36, "Printing the 3 elements after index 3")?;
    demo.print(&atoms.get_range(3, 3)?)?;

    demo.section(37, "[ = = = END OF DEMO = = = ]")?;
    log::info!(
        "demo finished with {} atoms (capacity {})",
        atoms.len(),
        atoms.capacity()
    );
    Ok(())
}
