//! Embedded byte sequences and their typed views.
//!
//! # Alignment
//!
//! Every embedded sequence lives inside an [`Aligned`] wrapper, so the first
//! byte of every [`Asset`] sits on an [`ASSET_ALIGN`] boundary. Sixteen bytes
//! covers the alignment of every primitive scalar (`u128` and `f64` included),
//! which makes [`Asset::get`] valid for any [`bytemuck::AnyBitPattern`] type
//! built from primitives. Types asking for more are rejected at compile time.

use std::fmt;
use std::mem::{align_of, size_of};

use bytemuck::AnyBitPattern;

/// Minimum alignment, in bytes, of every embedded sequence.
pub const ASSET_ALIGN: usize = 16;

/// Storage wrapper that pins embedded bytes to [`ASSET_ALIGN`].
///
/// Generated code declares one of these per file and hands a reference to
/// [`Asset::from_aligned`]; the sized form coerces to `Aligned<[u8]>`.
///
/// ```
/// use stow_registry_core::{Aligned, Asset};
///
/// static HELLO: Aligned<[u8; 5]> = Aligned { bytes: *b"hello" };
/// let asset = Asset::from_aligned(&HELLO);
/// assert_eq!(asset.bytes(), b"hello");
/// ```
#[repr(C, align(16))]
pub struct Aligned<B: ?Sized> {
	/// The embedded bytes.
	pub bytes: B,
}

static EMPTY_STORAGE: Aligned<[u8; 0]> = Aligned { bytes: [] };

/// An immutable, embedded file.
///
/// `Asset` is a non-owning view: it borrows storage with static duration, so
/// it is `Copy` and there is nothing to release. Equality compares contents.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
	bytes: &'static [u8],
}

impl Asset {
	/// An empty asset. Valid, and distinct from "not found".
	pub const EMPTY: Asset = Asset::from_aligned(&EMPTY_STORAGE);

	/// Wraps aligned static storage.
	#[inline]
	pub const fn from_aligned(storage: &'static Aligned<[u8]>) -> Self {
		Self {
			bytes: &storage.bytes,
		}
	}

	/// Returns the raw bytes, exactly as they were on disk.
	#[inline]
	pub const fn bytes(&self) -> &'static [u8] {
		self.bytes
	}

	/// Returns the length in bytes.
	#[inline]
	pub const fn size(&self) -> usize {
		self.bytes.len()
	}

	/// Returns true for an embedded empty file.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Returns a pointer to the first byte.
	#[inline]
	pub const fn as_ptr(&self) -> *const u8 {
		self.bytes.as_ptr()
	}

	/// Returns true when both assets view the same storage.
	#[inline]
	pub fn ptr_eq(&self, other: &Asset) -> bool {
		std::ptr::eq(self.bytes, other.bytes)
	}

	/// Interprets the bytes as UTF-8 text.
	pub fn as_str(&self) -> Result<&'static str, std::str::Utf8Error> {
		std::str::from_utf8(self.bytes)
	}

	/// Reinterprets the bytes as a slice of `T` without copying.
	///
	/// The element count is `size() / size_of::<T>()`. Trailing bytes that do
	/// not fill a whole `T` are dropped: a 10 byte asset viewed as `u32`
	/// yields two elements. Zero-sized `T` yields an empty slice.
	///
	/// Fails to compile when `T` needs more than [`ASSET_ALIGN`] alignment.
	pub fn get<T: AnyBitPattern>(&self) -> &'static [T] {
		const {
			assert!(
				align_of::<T>() <= ASSET_ALIGN,
				"element alignment exceeds the embedded storage alignment"
			)
		};

		let width = size_of::<T>();
		if width == 0 {
			return &[];
		}
		let count = self.bytes.len() / width;
		if count == 0 {
			return &[];
		}
		bytemuck::cast_slice(&self.bytes[..count * width])
	}

	/// Returns the number of `T` elements [`get`](Self::get) would yield.
	#[inline]
	pub const fn count_of<T>(&self) -> usize {
		match size_of::<T>() {
			0 => 0,
			width => self.bytes.len() / width,
		}
	}
}

impl fmt::Debug for Asset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Asset")
			.field("size", &self.bytes.len())
			.field("ptr", &self.bytes.as_ptr())
			.finish()
	}
}

impl AsRef<[u8]> for Asset {
	fn as_ref(&self) -> &[u8] {
		self.bytes
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	static TEN: Aligned<[u8; 10]> = Aligned {
		bytes: [1, 0, 0, 0, 2, 0, 0, 0, 0xAA, 0xBB],
	};
	static TEXT: Aligned<[u8; 11]> = Aligned {
		bytes: *b"hello\r\nyou\n",
	};

	#[test]
	fn test_typed_view_truncates() {
		let asset = Asset::from_aligned(&TEN);
		let words = asset.get::<u32>();

		assert_eq!(words.len(), 2);
		assert_eq!(asset.count_of::<u32>(), 2);
		assert_eq!(u32::from_ne_bytes([1, 0, 0, 0]), words[0]);
		assert_eq!(u32::from_ne_bytes([2, 0, 0, 0]), words[1]);
	}

	#[rstest]
	#[case::bytes(1, 10)]
	#[case::halves(2, 5)]
	#[case::words(4, 2)]
	#[case::doubles(8, 1)]
	#[case::wide(16, 0)]
	fn test_count_is_integer_division(#[case] width: usize, #[case] expected: usize) {
		let asset = Asset::from_aligned(&TEN);
		let count = match width {
			1 => asset.get::<u8>().len(),
			2 => asset.get::<u16>().len(),
			4 => asset.get::<u32>().len(),
			8 => asset.get::<u64>().len(),
			16 => asset.get::<u128>().len(),
			_ => unreachable!(),
		};
		assert_eq!(count, expected);
	}

	#[test]
	fn test_zero_sized_view_is_empty() {
		let asset = Asset::from_aligned(&TEN);
		assert!(asset.get::<()>().is_empty());
		assert_eq!(asset.count_of::<()>(), 0);
	}

	#[test]
	fn test_empty_asset() {
		assert_eq!(Asset::EMPTY.size(), 0);
		assert!(Asset::EMPTY.is_empty());
		assert!(Asset::EMPTY.get::<u64>().is_empty());
		assert_eq!(Asset::EMPTY.as_ptr() as usize % ASSET_ALIGN, 0);
	}

	#[test]
	fn test_storage_is_aligned() {
		let asset = Asset::from_aligned(&TEXT);
		assert_eq!(asset.as_ptr() as usize % ASSET_ALIGN, 0);
		assert_eq!(align_of::<Aligned<[u8; 1]>>(), ASSET_ALIGN);
		assert_eq!(std::mem::align_of_val::<Aligned<[u8]>>(&TEXT), ASSET_ALIGN);
	}

	#[test]
	fn test_bytes_are_verbatim() {
		let asset = Asset::from_aligned(&TEXT);
		assert_eq!(asset.bytes(), b"hello\r\nyou\n");
		assert_eq!(asset.as_str(), Ok("hello\r\nyou\n"));
	}

	#[test]
	fn test_equality_is_by_content() {
		static COPY: Aligned<[u8; 10]> = Aligned {
			bytes: [1, 0, 0, 0, 2, 0, 0, 0, 0xAA, 0xBB],
		};
		let a = Asset::from_aligned(&TEN);
		let b = Asset::from_aligned(&COPY);
		assert_eq!(a, b);
		assert!(!a.ptr_eq(&b));
		assert!(a.ptr_eq(&a));
	}
}
