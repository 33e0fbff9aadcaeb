//! Little-endian cursor helpers for the fixed packet layout.

use crate::types::{Vector3, WheelSet};
use crate::{DecodeError, DecodeResult, PACKET_SIZE};

/// Forward-only reader over a borrowed packet.
///
/// Every read is bounds-checked; running off the end reports the buffer as
/// having the wrong length instead of panicking.
pub(crate) struct WireReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    fn take<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let bytes = self
            .position
            .checked_add(N)
            .and_then(|end| self.buffer.get(self.position..end))
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or(DecodeError::BadLength {
                expected: PACKET_SIZE,
                actual: self.buffer.len(),
            })?;
        self.position += N;
        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self) -> DecodeResult<u8> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    pub(crate) fn read_i8(&mut self) -> DecodeResult<i8> {
        Ok(i8::from_le_bytes(self.take::<1>()?))
    }

    pub(crate) fn read_u16_le(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.take::<2>()?))
    }

    pub(crate) fn read_u32_le(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.take::<4>()?))
    }

    pub(crate) fn read_i32_le(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_le_bytes(self.take::<4>()?))
    }

    pub(crate) fn read_f32_le(&mut self) -> DecodeResult<f32> {
        Ok(f32::from_le_bytes(self.take::<4>()?))
    }

    /// Integer-coded flag: any non-zero pattern is `true`.
    pub(crate) fn read_flag(&mut self) -> DecodeResult<bool> {
        Ok(self.read_i32_le()? != 0)
    }

    pub(crate) fn read_vector3(&mut self) -> DecodeResult<Vector3> {
        Ok(Vector3 {
            x: self.read_f32_le()?,
            y: self.read_f32_le()?,
            z: self.read_f32_le()?,
        })
    }

    pub(crate) fn read_wheels_f32(&mut self) -> DecodeResult<WheelSet<f32>> {
        Ok(WheelSet {
            front_left: self.read_f32_le()?,
            front_right: self.read_f32_le()?,
            rear_left: self.read_f32_le()?,
            rear_right: self.read_f32_le()?,
        })
    }

    pub(crate) fn read_wheel_flags(&mut self) -> DecodeResult<WheelSet<bool>> {
        Ok(WheelSet {
            front_left: self.read_flag()?,
            front_right: self.read_flag()?,
            rear_left: self.read_flag()?,
            rear_right: self.read_flag()?,
        })
    }
}

/// Append-only little-endian writer.
pub(crate) struct WireWriter {
    buffer: Vec<u8>,
}

impl WireWriter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    pub(crate) fn write_i8(&mut self, value: i8) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn write_u32_le(&mut self, value: u32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn write_i32_le(&mut self, value: i32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn write_f32_le(&mut self, value: f32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub(crate) fn write_flag(&mut self, value: bool) -> &mut Self {
        self.write_i32_le(i32::from(value))
    }

    pub(crate) fn write_vector3(&mut self, value: &Vector3) -> &mut Self {
        self.write_f32_le(value.x)
            .write_f32_le(value.y)
            .write_f32_le(value.z)
    }

    pub(crate) fn write_wheels_f32(&mut self, value: &WheelSet<f32>) -> &mut Self {
        for v in value.iter() {
            self.write_f32_le(v);
        }
        self
    }

    pub(crate) fn write_wheel_flags(&mut self, value: &WheelSet<bool>) -> &mut Self {
        for v in value.iter() {
            self.write_flag(v);
        }
        self
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
