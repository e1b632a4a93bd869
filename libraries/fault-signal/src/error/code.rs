use core::fmt;

/// A platform error code. The vocabulary itself belongs to the platform: this crate only needs to
/// know which value means success and how to name the others.
pub trait ErrorCode: Copy + PartialEq {
    /// The single non-error value.
    const SUCCESS: Self;

    /// Human readable name of the code, e.g. `"ESP_ERR_TIMEOUT"`.
    fn name(&self) -> &'static str;

    fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    /// `Ok(())` for [`ErrorCode::SUCCESS`], `Err(self)` for everything else.
    fn into_result(self) -> Result<(), Self> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// ESP-IDF `esp_err_t`.
///
/// See <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/error-codes.html>.
/// Only the generic block is named, other components' codes resolve to `"UNKNOWN ERROR"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EspErr(pub i32);

impl EspErr {
    pub const OK: EspErr = EspErr(0);
    pub const FAIL: EspErr = EspErr(-1);
    pub const NO_MEM: EspErr = EspErr(0x101);
    pub const INVALID_ARG: EspErr = EspErr(0x102);
    pub const INVALID_STATE: EspErr = EspErr(0x103);
    pub const INVALID_SIZE: EspErr = EspErr(0x104);
    pub const NOT_FOUND: EspErr = EspErr(0x105);
    pub const NOT_SUPPORTED: EspErr = EspErr(0x106);
    pub const TIMEOUT: EspErr = EspErr(0x107);
    pub const INVALID_RESPONSE: EspErr = EspErr(0x108);
    pub const INVALID_CRC: EspErr = EspErr(0x109);
    pub const INVALID_VERSION: EspErr = EspErr(0x10A);
    pub const INVALID_MAC: EspErr = EspErr(0x10B);
    pub const NOT_FINISHED: EspErr = EspErr(0x10C);
    pub const NOT_ALLOWED: EspErr = EspErr(0x10D);
}

impl ErrorCode for EspErr {
    const SUCCESS: Self = EspErr::OK;

    fn name(&self) -> &'static str {
        match *self {
            EspErr::OK => "ESP_OK",
            EspErr::FAIL => "ESP_FAIL",
            EspErr::NO_MEM => "ESP_ERR_NO_MEM",
            EspErr::INVALID_ARG => "ESP_ERR_INVALID_ARG",
            EspErr::INVALID_STATE => "ESP_ERR_INVALID_STATE",
            EspErr::INVALID_SIZE => "ESP_ERR_INVALID_SIZE",
            EspErr::NOT_FOUND => "ESP_ERR_NOT_FOUND",
            EspErr::NOT_SUPPORTED => "ESP_ERR_NOT_SUPPORTED",
            EspErr::TIMEOUT => "ESP_ERR_TIMEOUT",
            EspErr::INVALID_RESPONSE => "ESP_ERR_INVALID_RESPONSE",
            EspErr::INVALID_CRC => "ESP_ERR_INVALID_CRC",
            EspErr::INVALID_VERSION => "ESP_ERR_INVALID_VERSION",
            EspErr::INVALID_MAC => "ESP_ERR_INVALID_MAC",
            EspErr::NOT_FINISHED => "ESP_ERR_NOT_FINISHED",
            EspErr::NOT_ALLOWED => "ESP_ERR_NOT_ALLOWED",
            _ => "UNKNOWN ERROR",
        }
    }
}

impl From<i32> for EspErr {
    fn from(value: i32) -> Self {
        EspErr(value)
    }
}

impl From<EspErr> for i32 {
    fn from(value: EspErr) -> Self {
        value.0
    }
}

impl fmt::Debug for EspErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", self.name(), self.0)
    }
}

impl fmt::Display for EspErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EspErr {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}({=i32:#x})", self.name(), self.0)
    }
}
