//! Registration macros.
//!
//! [`discoverable_subtype!`](crate::discoverable_subtype) declares a concrete
//! type a discoverable subtype of a root marker trait and proves the claim at
//! compile time; [`subtype_manifest!`](crate::subtype_manifest) embeds a
//! listing resource for a root. Both submit through `inventory`, so a
//! registration takes effect by linking the declaring crate — there is
//! nothing to call at startup.

/// Declares `$ty` a discoverable subtype of the root trait `$root`.
///
/// `$ty` must implement `$root` (checked at compile time), `serde::Deserialize`
/// (required by the decode hook) and be `Send + Sync`. The wire discriminator
/// defaults to the type's simple name; pass `name = "..."` to override it.
///
/// ```ignore
/// discoverable_subtype!(Dog: Animal);
/// discoverable_subtype!(Cat: Animal, name = "felis");
/// ```
///
/// A type may be registered under several roots with one invocation each.
#[macro_export]
macro_rules! discoverable_subtype {
	($ty:ty : $root:path) => {
		$crate::__submit_subtype!($ty, $root, ::core::option::Option::None);
	};
	($ty:ty : $root:path, name = $name:expr) => {
		$crate::__submit_subtype!($ty, $root, ::core::option::Option::Some($name));
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __submit_subtype {
	($ty:ty, $root:path, $name:expr) => {
		const _: () = {
			// Compile-time proof that the registration is assignable to its root.
			const _: fn() = || {
				fn assignable<T: $root>() {}
				assignable::<$ty>();
			};

			fn decode(
				de: &mut dyn $crate::erased_serde::Deserializer<'_>,
			) -> ::core::result::Result<
				::std::boxed::Box<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync>,
				$crate::erased_serde::Error,
			> {
				::core::result::Result::Ok(::std::boxed::Box::new(
					$crate::erased_serde::deserialize::<$ty>(de)?,
				))
			}

			static DEF: $crate::SubtypeDef = $crate::SubtypeDef {
				ty: $crate::TypeKey::of::<$ty>,
				root: $crate::TypeKey::of::<dyn $root>,
				package: env!("CARGO_PKG_NAME"),
				name: $name,
				decode,
			};

			$crate::inventory::submit! { $crate::SubtypeReg(&DEF) }
		};
	};
}

/// Embeds a listing resource for `$root`.
///
/// The contents are plain text, one fully-qualified type path per line;
/// blank lines and `#` comments are ignored. Typically the expression is an
/// `include_str!` of a build-generated file.
///
/// ```ignore
/// subtype_manifest!(Animal => include_str!("../services/zoo.Animal"));
/// ```
#[macro_export]
macro_rules! subtype_manifest {
	($root:path => $contents:expr) => {
		const _: () = {
			static SOURCE: $crate::ManifestSource = $crate::ManifestSource {
				root: $crate::TypeKey::of::<dyn $root>,
				package: env!("CARGO_PKG_NAME"),
				contents: $contents,
			};

			$crate::inventory::submit! { $crate::ManifestSourceReg(&SOURCE) }
		};
	};
}
