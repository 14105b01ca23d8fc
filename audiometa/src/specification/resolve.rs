use crate::config::{Id3v2Version, global_options};
use crate::file::{FileType, TagFormat, TagFormats, TagType};
use crate::specification::Specification;

use std::path::Path;

/// Everything the resolver needs to know about a record
pub(crate) struct ResolveContext<'a> {
	pub(crate) formats: &'a TagFormats,
	pub(crate) manual: Specification,
	pub(crate) file_type: Option<FileType>,
	pub(crate) path: Option<&'a Path>,
}

/// Determine the active specifications, in priority order
///
/// 1. Containers physically present, in the order the codec reported them
/// 2. The specification the record was created with
/// 3. A single pick out of the containers the codec can write
pub(crate) fn resolve(ctx: &ResolveContext<'_>) -> Vec<Specification> {
	let present = ctx
		.formats
		.present
		.iter()
		.filter(|f| f.id() > 0)
		.map(|f| from_present_format(ctx, f))
		.filter(|spec| *spec != Specification::Undefined)
		.collect::<Vec<_>>();

	if !present.is_empty() {
		return present;
	}

	if ctx.manual != Specification::Undefined {
		return vec![ctx.manual];
	}

	if !ctx.formats.supported.is_empty() {
		let pick = from_container(ctx);
		if pick != Specification::Undefined {
			return vec![pick];
		}
	}

	Vec::new()
}

fn from_present_format(ctx: &ResolveContext<'_>, format: &TagFormat) -> Specification {
	if format.short_name() == "Native" {
		return from_container(ctx);
	}

	Specification::from_container_name(format.name())
}

fn from_container(ctx: &ResolveContext<'_>) -> Specification {
	match ctx.file_type.and_then(|ft| ft.native_specification()) {
		Some(spec) => spec,
		None => first_supported(ctx),
	}
}

fn first_supported(ctx: &ResolveContext<'_>) -> Specification {
	let formats = ctx.formats;
	let has_ape_support = formats.supports(TagType::Ape);

	let ape_extension = ctx
		.path
		.and_then(Path::extension)
		.is_some_and(|ext| ext.eq_ignore_ascii_case("ape"));
	if ape_extension && has_ape_support {
		return Specification::Ape;
	}

	if formats.supports(TagType::Id3v2) {
		let version = unsafe { global_options().id3v2_version };
		return match version {
			Id3v2Version::V3 => Specification::Id3v23,
			Id3v2Version::V4 => Specification::Id3v24,
		};
	}

	if formats.supports(TagType::Id3v1) {
		return Specification::Id3v1;
	}

	if has_ape_support {
		return Specification::Ape;
	}

	Specification::Undefined
}
