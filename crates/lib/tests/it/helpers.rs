use mathforge::{
    Document, MathObjectKind, Settings,
    containers::Shape,
    path::{NodePath, Step},
    types::{CoefficientSettings, CoefficientsSettings},
};

// ==========================
// DOCUMENT FACTORIES
// ==========================

/// Creates a document holding the default settings of `kind`.
pub fn new_document(kind: MathObjectKind) -> Document {
    Document::new(kind).expect("Failed to create document")
}

/// Creates a document rooted at `settings`.
pub fn document_with(settings: impl Into<Settings>) -> Document {
    let settings = settings.into();
    Document::builder(settings.kind())
        .settings(settings)
        .build()
        .expect("Failed to create document")
}

/// Creates a document rooted at `settings` with seeded interface modes.
pub fn seeded_document_with(settings: impl Into<Settings>) -> Document {
    let settings = settings.into();
    Document::builder(settings.kind())
        .settings(settings)
        .seed_modes(true)
        .build()
        .expect("Failed to create document")
}

/// A coefficient collection of `count` integer coefficients in `[min, max]`.
pub fn integer_collection(count: usize, min: f64, max: f64) -> CoefficientsSettings {
    CoefficientsSettings::repeated(CoefficientSettings::default().with_range(&[min, max]), count)
}

// ==========================
// PATHS
// ==========================

/// Path of the coefficient collection directly below the root.
pub fn coefficients() -> NodePath {
    NodePath::from([Step::Coefficients])
}

/// Path of coefficient `index` directly below the root's collection.
pub fn coefficient(index: usize) -> NodePath {
    coefficients().push(Step::Coefficient(index))
}

// ==========================
// READS
// ==========================

/// Reads the node at `path` as shape `C`, panicking on any other kind.
pub fn read_as<C: Shape>(document: &Document, path: &NodePath) -> C {
    let settings = document.read(path).expect("Failed to read node");
    C::try_from(settings)
        .unwrap_or_else(|found| panic!("expected {}, found {}", C::KIND, found.kind()))
}
