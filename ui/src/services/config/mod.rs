/// Endpoint configuration for the registry client.
///
/// The attendance endpoint is mounted under a host-controlled base
/// segment; the validate endpoint is fixed by the outcome API contract.
#[derive(Clone, PartialEq, Debug)]
pub struct RegistryConfig {
    pub base_path: String,
    pub validate_endpoint: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_path: "teacher".to_string(),
            validate_endpoint: "/outcome/validate".to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn attendance_url(&self, event_id: &str) -> String {
        format!("/{}/attendance/{}", self.base_path.trim_matches('/'), event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_url_shape() {
        let config = RegistryConfig::default();
        assert_eq!(config.attendance_url("evt-9"), "/teacher/attendance/evt-9");
    }

    #[test]
    fn test_base_path_slashes_normalized() {
        let config = RegistryConfig {
            base_path: "/admin/".to_string(),
            ..RegistryConfig::default()
        };
        assert_eq!(config.attendance_url("e1"), "/admin/attendance/e1");
    }
}
