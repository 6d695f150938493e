// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use memkey_type::{Error, FieldType, Result};

const SIGN_BIT: u8 = 0x80;

pub const FALSE: u8 = 0x01;
pub const TRUE: u8 = 0x02;

#[inline]
pub fn encode_bool(v: bool) -> [u8; 1] {
	if v {
		[TRUE]
	} else {
		[FALSE]
	}
}

/// Big-endian two's complement with the sign bit flipped, so negatives land
/// below non-negatives in unsigned byte order.
#[inline]
pub fn encode_i32(v: i32) -> [u8; 4] {
	let mut bytes = v.to_be_bytes();
	bytes[0] ^= SIGN_BIT;
	bytes
}

#[inline]
pub fn encode_i64(v: i64) -> [u8; 8] {
	let mut bytes = v.to_be_bytes();
	bytes[0] ^= SIGN_BIT;
	bytes
}

/// Negative floats have every bit inverted, which reverses their order and
/// clears the sign bit. Non-negative floats only get the sign bit set.
#[inline]
pub fn encode_f32(v: f32) -> [u8; 4] {
	let mut bytes = v.to_be_bytes();
	if v < 0.0 {
		bytes.iter_mut().for_each(|b| *b = !*b);
	} else {
		bytes[0] |= SIGN_BIT;
	}
	bytes
}

#[inline]
pub fn encode_f64(v: f64) -> [u8; 8] {
	let mut bytes = v.to_be_bytes();
	if v < 0.0 {
		bytes.iter_mut().for_each(|b| *b = !*b);
	} else {
		bytes[0] |= SIGN_BIT;
	}
	bytes
}

/// Appends `bytes` right-padded with `0x00` to `width`. Nothing is written on
/// error.
pub fn encode_padded(field_type: FieldType, bytes: &[u8], width: u32, output: &mut Vec<u8>) -> Result<()> {
	if bytes.len() > width as usize {
		return Err(Error::SizeExceeded {
			field_type,
			size: bytes.len(),
			width,
		});
	}
	if bytes.last() == Some(&0x00) {
		return Err(Error::TrailingNul {
			field_type,
		});
	}
	output.extend_from_slice(bytes);
	output.resize(output.len() + width as usize - bytes.len(), 0x00);
	Ok(())
}
