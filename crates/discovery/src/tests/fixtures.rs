//! Shared roots and subtypes exercised by the discovery tests.
//!
//! Each scenario owns a distinct root so registrations cannot bleed between
//! tests; everything here lives in one inventory pool for the whole test
//! binary.

use core::any::Any;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use taxon_core::{
	Discoverable, SubtypeDef, TypeKey, candidates, discoverable_subtype, naming, subtype_manifest,
};

use crate::config::SERVICES_NAMESPACE;

// --- root with one embedded listing carrying duplicates and stale lines ---

pub trait Animal: Any + Send + Sync {}

#[derive(Debug, Deserialize)]
pub struct Dog;

#[derive(Debug, Deserialize)]
pub struct Cat;

impl Animal for Dog {}
impl Animal for Cat {}

discoverable_subtype!(Dog: Animal);
discoverable_subtype!(Cat: Animal);

// `Ghost` was never linked; `Square` is registered, but under `Shape`.
subtype_manifest!(Animal => "\
taxon_discovery::tests::fixtures::Dog
taxon_discovery::tests::fixtures::Cat
taxon_discovery::tests::fixtures::Cat
taxon_discovery::tests::fixtures::Ghost   # gone since the great refactor
taxon_discovery::tests::fixtures::Square
");

// --- root with two contributing embedded sources ---

pub trait Shape: Any + Send + Sync {}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Circle {
	pub radius: f64,
}

#[derive(Debug, Deserialize)]
pub struct Square;

impl Shape for Circle {}
impl Shape for Square {}

discoverable_subtype!(Circle: Shape);
discoverable_subtype!(Square: Shape);

subtype_manifest!(Shape => "taxon_discovery::tests::fixtures::Circle\n");
subtype_manifest!(Shape => "taxon_discovery::tests::fixtures::Square\n");

// --- root with no listing resources anywhere ---

pub trait Phantom: Any + Send + Sync {}

// --- two distinct types claiming the same discriminator ---

pub trait Signal: Any + Send + Sync {}

#[derive(Debug, Deserialize)]
pub struct LongPulse;

#[derive(Debug, Deserialize)]
pub struct ShortPulse;

impl Signal for LongPulse {}
impl Signal for ShortPulse {}

discoverable_subtype!(LongPulse: Signal, name = "pulse");
discoverable_subtype!(ShortPulse: Signal, name = "pulse");

subtype_manifest!(Signal => "\
taxon_discovery::tests::fixtures::LongPulse
taxon_discovery::tests::fixtures::ShortPulse
");

// --- one type under the default root ---

#[derive(Debug, Deserialize)]
pub struct Beacon;

impl Discoverable for Beacon {}

discoverable_subtype!(Beacon: Discoverable);

subtype_manifest!(Discoverable => "taxon_discovery::tests::fixtures::Beacon\n");

// --- candidates with no embedded listing, for directory-based tests ---

pub trait Sensor: Any + Send + Sync {}

#[derive(Debug, Deserialize)]
pub struct ThermoSensor;

#[derive(Debug, Deserialize)]
pub struct PressureSensor;

impl Sensor for ThermoSensor {}
impl Sensor for PressureSensor {}

discoverable_subtype!(ThermoSensor: Sensor);
discoverable_subtype!(PressureSensor: Sensor);

// --- one type with one registered name, for alias-clash tests ---

pub trait Critter: Any + Send + Sync {}

#[derive(Debug, Deserialize)]
pub struct Chameleon;

impl Critter for Chameleon {}

discoverable_subtype!(Chameleon: Critter, name = "green");

// --- helpers ---

/// Pulls a fixture's def out of the candidate pool.
pub fn pool_def(ty: TypeKey, root: TypeKey) -> &'static SubtypeDef {
	candidates()
		.find(|def| def.type_key().id() == ty.id() && def.root_key().id() == root.id())
		.expect("fixture registered")
}

/// A def sharing `Chameleon`'s type but claiming a second discriminator,
/// as a stale or competing crate might.
pub fn chameleon_brown() -> &'static SubtypeDef {
	let green = pool_def(TypeKey::of::<Chameleon>(), TypeKey::of::<dyn Critter>());
	Box::leak(Box::new(SubtypeDef {
		ty: TypeKey::of::<Chameleon>,
		root: TypeKey::of::<dyn Critter>,
		package: "taxon-discovery",
		name: Some("brown"),
		decode: green.decode,
	}))
}

/// A def whose explicit discriminator is empty.
pub fn nameless_chameleon() -> &'static SubtypeDef {
	let green = pool_def(TypeKey::of::<Chameleon>(), TypeKey::of::<dyn Critter>());
	Box::leak(Box::new(SubtypeDef {
		ty: TypeKey::of::<Chameleon>,
		root: TypeKey::of::<dyn Critter>,
		package: "taxon-discovery",
		name: Some(""),
		decode: green.decode,
	}))
}

/// Writes a listing file for `root` under `dir`'s services namespace.
pub fn write_listing(dir: &Path, root: TypeKey, names: &[&str]) {
	let services = dir.join(SERVICES_NAMESPACE);
	fs::create_dir_all(&services).expect("create services dir");
	fs::write(services.join(naming::listing_key(root)), names.join("\n")).expect("write listing");
}

/// The embedded listings above hardcode these paths; pin the compiler
/// rendering they rely on.
#[test]
fn fixture_paths_match_compiler_rendering() {
	assert_eq!(
		TypeKey::of::<Dog>().path(),
		"taxon_discovery::tests::fixtures::Dog"
	);
	assert_eq!(
		TypeKey::of::<dyn Animal>().path(),
		"dyn taxon_discovery::tests::fixtures::Animal"
	);
}
