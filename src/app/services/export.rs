//! JSON export of accepted device records

use std::io::Write;

use crate::Result;
use crate::app::models::DeviceRecord;

/// Serialize devices as a JSON array
pub fn devices_to_json(devices: &[DeviceRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(devices)?
    } else {
        serde_json::to_string(devices)?
    };
    Ok(json)
}

/// Write devices as a JSON array followed by a newline
pub fn write_devices_json<W: Write>(
    mut writer: W,
    devices: &[DeviceRecord],
    pretty: bool,
) -> Result<()> {
    let json = devices_to_json(devices, pretty)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
