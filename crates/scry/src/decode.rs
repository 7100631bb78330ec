//! Discriminator-dispatched decoding of wire payloads.
//!
//! Every object the API returns names its own kind in an `object` field.
//! Decoding therefore happens in two steps: peek at the discriminator, then
//! run the decode routine registered for that kind. List envelopes are not
//! parametrized by element type on the wire, so a typed list decode reads
//! the envelope with its elements left as raw JSON and then downcasts each
//! element, checking its discriminator against the requested kind. An
//! element of the wrong kind is a decode failure, never a silent relabeling.

use dashmap::DashMap;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{Error, Result, body_prefix};
use crate::page::List;
use crate::types::{Listable, ObjectKind, WireObject};

type DecodeFn = fn(&[u8]) -> std::result::Result<WireObject, serde_json::Error>;

/// Reads only the discriminator out of a payload.
#[derive(Deserialize)]
struct Probe {
    object: String,
}

/// A list envelope with its elements still undecoded.
#[derive(Deserialize)]
struct RawList {
    data: Vec<Box<RawValue>>,
    has_more: Option<bool>,
    next_page: Option<String>,
    total_cards: Option<u64>,
    warnings: Option<Vec<String>>,
}

/// Dispatch table from discriminator to decode routine, populated on first
/// use.
///
/// One registry lives for the lifetime of the client that owns it and is
/// shared by every concurrent operation, including pager prefetch tasks.
/// Inserts are idempotent: a race to populate a kind stores the same routine
/// either way.
#[derive(Debug, Default)]
pub(crate) struct DecoderRegistry {
    by_kind: DashMap<ObjectKind, DecodeFn>,
}

impl DecoderRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Read the discriminator of a payload without decoding the rest.
    fn kind_of(&self, bytes: &[u8]) -> Result<ObjectKind> {
        let probe: Probe = serde_json::from_slice(bytes).map_err(|e| decode_error(e, bytes))?;
        ObjectKind::from_discriminator(&probe.object)
            .ok_or(Error::UnknownObject(probe.object))
    }

    fn decoder_for(&self, kind: ObjectKind) -> Option<DecodeFn> {
        if let Some(f) = self.by_kind.get(&kind) {
            return Some(*f);
        }
        let f = build_decoder(kind)?;
        Some(*self.by_kind.entry(kind).or_insert(f))
    }

    fn run(&self, kind: ObjectKind, bytes: &[u8]) -> Result<WireObject> {
        let f = self
            .decoder_for(kind)
            .ok_or_else(|| envelope_misuse(bytes))?;
        f(bytes).map_err(|e| decode_error(e, bytes))
    }

    /// Decode a payload as whatever its discriminator says it is.
    pub(crate) fn decode_untyped(&self, bytes: &[u8]) -> Result<WireObject> {
        let kind = self.kind_of(bytes)?;
        self.run(kind, bytes)
    }

    /// Decode a payload as a specific kind, rejecting a wrong discriminator
    /// even when the body would otherwise fit the target shape.
    pub(crate) fn decode_as<T: Listable>(&self, bytes: &[u8]) -> Result<T> {
        let kind = self.kind_of(bytes)?;
        if kind != T::KIND {
            return Err(Error::UnexpectedObject {
                expected: T::KIND,
                found: kind,
            });
        }
        let obj = self.run(kind, bytes)?;
        let found = obj.kind();
        T::from_wire(obj).ok_or(Error::UnexpectedObject {
            expected: T::KIND,
            found,
        })
    }

    /// Decode a list envelope whose elements must all be of kind `T`.
    pub(crate) fn decode_list<T: Listable>(&self, bytes: &[u8]) -> Result<List<T>> {
        let kind = self.kind_of(bytes)?;
        if kind != ObjectKind::List {
            return Err(Error::UnexpectedObject {
                expected: ObjectKind::List,
                found: kind,
            });
        }
        let raw: RawList = serde_json::from_slice(bytes).map_err(|e| decode_error(e, bytes))?;
        let mut data = Vec::with_capacity(raw.data.len());
        for element in &raw.data {
            data.push(self.decode_as::<T>(element.get().as_bytes())?);
        }
        Ok(List {
            data,
            has_more: raw.has_more,
            next_page: raw.next_page,
            total_cards: raw.total_cards,
            warnings: raw.warnings,
        })
    }

    /// Decode a bare JSON array of objects of kind `T`, the shape bulk dump
    /// files use.
    pub(crate) fn decode_array<T: Listable>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        let elements: Vec<Box<RawValue>> =
            serde_json::from_slice(bytes).map_err(|e| decode_error(e, bytes))?;
        elements
            .iter()
            .map(|element| self.decode_as::<T>(element.get().as_bytes()))
            .collect()
    }

    /// Decode a bare JSON array of mixed object kinds.
    pub(crate) fn decode_array_untyped(&self, bytes: &[u8]) -> Result<Vec<WireObject>> {
        let elements: Vec<Box<RawValue>> =
            serde_json::from_slice(bytes).map_err(|e| decode_error(e, bytes))?;
        elements
            .iter()
            .map(|element| self.decode_untyped(element.get().as_bytes()))
            .collect()
    }
}

fn build_decoder(kind: ObjectKind) -> Option<DecodeFn> {
    Some(match kind {
        ObjectKind::BulkData => |b| serde_json::from_slice(b).map(WireObject::BulkData),
        ObjectKind::Card => |b| serde_json::from_slice(b).map(WireObject::Card),
        ObjectKind::CardFace => |b| serde_json::from_slice(b).map(WireObject::CardFace),
        ObjectKind::CardSymbol => |b| serde_json::from_slice(b).map(WireObject::CardSymbol),
        ObjectKind::Catalog => |b| serde_json::from_slice(b).map(WireObject::Catalog),
        ObjectKind::Error => |b| serde_json::from_slice(b).map(WireObject::Error),
        ObjectKind::ManaCost => |b| serde_json::from_slice(b).map(WireObject::ManaCost),
        ObjectKind::Migration => |b| serde_json::from_slice(b).map(WireObject::Migration),
        ObjectKind::RelatedCard => |b| serde_json::from_slice(b).map(WireObject::RelatedCard),
        ObjectKind::Ruling => |b| serde_json::from_slice(b).map(WireObject::Ruling),
        ObjectKind::Set => |b| serde_json::from_slice(b).map(WireObject::Set),
        // An envelope is not a single object; callers go through decode_list.
        ObjectKind::List => return None,
    })
}

fn decode_error(source: serde_json::Error, bytes: &[u8]) -> Error {
    Error::Decode {
        source,
        body: body_prefix(bytes),
    }
}

fn envelope_misuse(bytes: &[u8]) -> Error {
    use serde::de::Error as _;
    decode_error(
        serde_json::Error::custom("list envelope where a single object was expected"),
        bytes,
    )
}
