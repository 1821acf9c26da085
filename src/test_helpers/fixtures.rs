use crate::mirror::fetch::RawFirmwareRecord;
use crate::mirror::transform::FirmwareEntry;

/// Builder for creating test RawFirmwareRecord instances
pub struct RawRecordBuilder {
    file_path_name: String,
    device_type: u32,
    version: f64,
    readme_en: String,
    beta: String,
    md5: Option<String>,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self {
            file_path_name: "fw/x.bin".to_string(),
            device_type: 28,
            version: 1.5,
            readme_en: "note\r\n".to_string(),
            beta: String::new(),
            md5: None,
        }
    }

    pub fn file_path_name(mut self, path: &str) -> Self {
        self.file_path_name = path.to_string();
        self
    }

    pub fn device_type(mut self, code: u32) -> Self {
        self.device_type = code;
        self
    }

    pub fn version(mut self, version: f64) -> Self {
        self.version = version;
        self
    }

    pub fn readme(mut self, readme: &str) -> Self {
        self.readme_en = readme.to_string();
        self
    }

    pub fn beta(mut self, marker: &str) -> Self {
        self.beta = marker.to_string();
        self
    }

    pub fn md5(mut self, md5: &str) -> Self {
        self.md5 = Some(md5.to_string());
        self
    }

    pub fn build(self) -> RawFirmwareRecord {
        RawFirmwareRecord {
            file_path_name: self.file_path_name,
            device_type: self.device_type,
            version: self.version,
            readme_en: self.readme_en,
            beta: self.beta,
            md5: self.md5,
        }
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test FirmwareEntry instances
pub struct EntryBuilder {
    url: String,
    device: String,
    version: String,
    readme: String,
    beta: bool,
    md5: Option<String>,
}

impl EntryBuilder {
    pub fn new(device: &str, version: &str) -> Self {
        Self {
            url: format!("http://dl.example.com/firmware/fw/{}.bin", version),
            device: device.to_string(),
            version: version.to_string(),
            readme: "release notes\n".to_string(),
            beta: false,
            md5: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn readme(mut self, readme: &str) -> Self {
        self.readme = readme.to_string();
        self
    }

    pub fn beta(mut self, beta: bool) -> Self {
        self.beta = beta;
        self
    }

    pub fn md5(mut self, md5: &str) -> Self {
        self.md5 = Some(md5.to_string());
        self
    }

    pub fn build(self) -> FirmwareEntry {
        FirmwareEntry {
            url: self.url,
            device: self.device,
            version: self.version,
            readme: self.readme,
            beta: self.beta,
            md5: self.md5,
        }
    }
}
