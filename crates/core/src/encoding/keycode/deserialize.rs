// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use memkey_type::{Result, malformed};

use super::serialize::{FALSE, TRUE};

const SIGN_BIT: u8 = 0x80;

#[inline]
pub fn decode_bool(byte: u8) -> Result<bool> {
	match byte {
		FALSE => Ok(false),
		TRUE => Ok(true),
		other => malformed!("invalid boolean byte {other:#04x}"),
	}
}

#[inline]
pub fn decode_i32(mut bytes: [u8; 4]) -> i32 {
	bytes[0] ^= SIGN_BIT;
	i32::from_be_bytes(bytes)
}

#[inline]
pub fn decode_i64(mut bytes: [u8; 8]) -> i64 {
	bytes[0] ^= SIGN_BIT;
	i64::from_be_bytes(bytes)
}

/// A clear sign bit means the value was negative and fully inverted.
#[inline]
pub fn decode_f32(mut bytes: [u8; 4]) -> f32 {
	if bytes[0] & SIGN_BIT == 0 {
		bytes.iter_mut().for_each(|b| *b = !*b);
	} else {
		bytes[0] &= !SIGN_BIT;
	}
	f32::from_be_bytes(bytes)
}

#[inline]
pub fn decode_f64(mut bytes: [u8; 8]) -> f64 {
	if bytes[0] & SIGN_BIT == 0 {
		bytes.iter_mut().for_each(|b| *b = !*b);
	} else {
		bytes[0] &= !SIGN_BIT;
	}
	f64::from_be_bytes(bytes)
}

/// Strips the `0x00` padding.
#[inline]
pub fn decode_padded(input: &[u8]) -> &[u8] {
	let end = input.iter().rposition(|&b| b != 0x00).map_or(0, |i| i + 1);
	&input[..end]
}
