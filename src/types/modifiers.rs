//! Class-level behaviour switches and their inheritance.
//!
//! Two switches exist: stack trace collection and transparency. They compose
//! asymmetrically down the namespace/class hierarchy:
//!
//! - collection is conjunctive: every level must agree to collect, so one
//!   `OmitStackTrace` silences all descendants;
//! - transparency is disjunctive: one `Transparent` ancestor makes every
//!   descendant transparent by default.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{ClassModifier, Modifiers};
//!
//! let parent = Modifiers::own(&[ClassModifier::OmitStackTrace]);
//! let child = Modifiers::inherited(&parent)
//!     .replace_with(Modifiers::own(&[ClassModifier::Transparent]));
//!
//! assert!(!child.collect_stack_trace());
//! assert!(child.transparent());
//! ```

use std::sync::Arc;

/// A single switch requested when a class or namespace is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassModifier {
    /// Errors of the class are transparent wrappers by default.
    Transparent,
    /// Errors of the class do not collect a stack trace on creation.
    OmitStackTrace,
}

/// Explicit switches owned by one class or namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassModifiers {
    omit_stack_trace: bool,
    transparent: bool,
}

impl ClassModifiers {
    /// Folds a list of requested modifiers into their flag form.
    pub fn from_modifiers(modifiers: &[ClassModifier]) -> Self {
        modifiers.iter().fold(Self::default(), |mut acc, modifier| {
            match modifier {
                ClassModifier::OmitStackTrace => acc.omit_stack_trace = true,
                ClassModifier::Transparent => acc.transparent = true,
            }
            acc
        })
    }
}

/// Effective modifiers of a class or namespace.
#[derive(Debug, Clone, Default)]
pub enum Modifiers {
    /// Nothing requested anywhere: collect traces, not transparent.
    #[default]
    None,
    /// Set once at definition time.
    Own(ClassModifiers),
    /// Parent modifiers combined with this level's override.
    Inherited(Arc<InheritedModifiers>),
}

/// Parent layer plus the override layer of an [`Modifiers::Inherited`] value.
#[derive(Debug)]
pub struct InheritedModifiers {
    parent: Modifiers,
    overriding: Modifiers,
}

impl InheritedModifiers {
    /// Modifiers inherited from the parent level.
    pub fn parent(&self) -> &Modifiers {
        &self.parent
    }

    /// Modifiers applied at this level.
    pub fn overriding(&self) -> &Modifiers {
        &self.overriding
    }
}

impl Modifiers {
    /// Own modifiers built from the requested switches.
    pub fn own(modifiers: &[ClassModifier]) -> Self {
        Self::Own(ClassModifiers::from_modifiers(modifiers))
    }

    /// Modifiers for a new level below `parent`, with an empty override layer.
    ///
    /// Inheriting from [`Modifiers::None`] stays [`Modifiers::None`].
    pub fn inherited(parent: &Modifiers) -> Self {
        match parent {
            Self::None => Self::None,
            other => Self::Inherited(Arc::new(InheritedModifiers {
                parent: other.clone(),
                overriding: Self::None,
            })),
        }
    }

    /// Whether errors created under these modifiers collect a stack trace.
    pub fn collect_stack_trace(&self) -> bool {
        match self {
            Self::None => true,
            Self::Own(own) => !own.omit_stack_trace,
            Self::Inherited(inherited) => {
                inherited.parent.collect_stack_trace() && inherited.overriding.collect_stack_trace()
            },
        }
    }

    /// Whether errors created under these modifiers are transparent by default.
    pub fn transparent(&self) -> bool {
        match self {
            Self::None => false,
            Self::Own(own) => own.transparent,
            Self::Inherited(inherited) => {
                inherited.parent.transparent() || inherited.overriding.transparent()
            },
        }
    }

    /// Returns the modifiers after applying `new` at this level.
    ///
    /// # Panics
    ///
    /// Panics when this level already owns modifiers: they are set exactly once.
    #[track_caller]
    pub fn replace_with(&self, new: Modifiers) -> Modifiers {
        match self {
            Self::None => new,
            Self::Own(_) => panic!("attempt to modify class modifiers more than once"),
            Self::Inherited(inherited) => Self::Inherited(Arc::new(InheritedModifiers {
                parent: inherited.parent.clone(),
                overriding: inherited.overriding.replace_with(new),
            })),
        }
    }
}
