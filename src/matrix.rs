use serde::Serialize;

/// One OS/compiler target. `version` is the compiler package suffix
/// (ex: "-6" for gcc-6); the `compiler:` selector wants the bare name
/// while env lines want the composed spec, so the two stay separate.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformEntry {
    pub os: String,
    pub compiler: String,
    pub version: String,
}

impl PlatformEntry {
    pub fn new(os: &str, compiler: &str, version: &str) -> Self {
        Self {
            os: os.to_string(),
            compiler: compiler.to_string(),
            version: version.to_string(),
        }
    }

    /// Composed compiler spec, ex: "gcc" + "-6" => "gcc-6".
    pub fn compiler_spec(&self) -> String {
        format!("{}{}", self.compiler, self.version)
    }
}

/// One sequential phase of the generated pipeline: display name for the
/// `stage:` selector, identifier for the build script argument.
#[derive(Debug, Clone, Serialize)]
pub struct Stage {
    pub name: String,
    pub id: String,
}

impl Stage {
    pub fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Mac,
    Linux,
}

impl OsFamily {
    /// Value of a job's `os:` selector.
    pub fn tag(self) -> &'static str {
        match self {
            OsFamily::Mac => "osx",
            OsFamily::Linux => "linux",
        }
    }

    pub fn install_script(self) -> &'static str {
        match self {
            OsFamily::Mac => "travis/install_osx.sh",
            OsFamily::Linux => "travis/install_linux.sh",
        }
    }
}

/// The four configuration axes. Every (stage, platform entry, build type)
/// triple yields exactly one job block; nothing is filtered.
#[derive(Debug, Clone, Serialize)]
pub struct Matrix {
    pub mac: Vec<PlatformEntry>,
    pub linux: Vec<PlatformEntry>,
    pub build_types: Vec<String>,
    pub stages: Vec<Stage>,
}

impl Matrix {
    /// The built-in axes. Sequence order is load-bearing: it fixes the
    /// emission order of the generated document.
    pub fn builtin() -> Self {
        Self {
            mac: vec![PlatformEntry::new("osx", "clang", "-4.0")],
            linux: vec![
                PlatformEntry::new("ubuntu-16.10", "gcc", "-6"),
                PlatformEntry::new("debian-9", "gcc", "-6"),
            ],
            build_types: vec!["DefaultDebug".to_string(), "DefaultRelease".to_string()],
            stages: vec![
                Stage::new("Build (1st run)", "Build1"),
                Stage::new("Build (2nd run)", "Build2"),
                Stage::new("Build (3rd run)", "Build3"),
                Stage::new("Build (4th run)", "Build4"),
                Stage::new("Test all", "TestAll"),
            ],
        }
    }

    pub fn entries(&self, family: OsFamily) -> &[PlatformEntry] {
        match family {
            OsFamily::Mac => &self.mac,
            OsFamily::Linux => &self.linux,
        }
    }

    pub fn job_count(&self) -> usize {
        self.stages.len() * (self.mac.len() + self.linux.len()) * self.build_types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_axes_match_travis_setup() {
        let m = Matrix::builtin();
        assert_eq!(m.mac.len(), 1);
        assert_eq!(m.linux.len(), 2);
        assert_eq!(m.build_types, vec!["DefaultDebug", "DefaultRelease"]);
        assert_eq!(m.stages.len(), 5);
        assert_eq!(m.stages[0].name, "Build (1st run)");
        assert_eq!(m.stages[0].id, "Build1");
        assert_eq!(m.stages[4].id, "TestAll");
    }

    #[test]
    fn job_count_is_the_full_cross_product() {
        let m = Matrix::builtin();
        assert_eq!(m.job_count(), 5 * (1 + 2) * 2);

        let mut no_mac = m.clone();
        no_mac.mac.clear();
        assert_eq!(no_mac.job_count(), 5 * 2 * 2);
    }

    #[test]
    fn compiler_spec_composes_name_and_suffix() {
        let e = PlatformEntry::new("ubuntu-16.10", "gcc", "-6");
        assert_eq!(e.compiler_spec(), "gcc-6");
        assert_eq!(e.compiler, "gcc");

        let e = PlatformEntry::new("osx", "clang", "-4.0");
        assert_eq!(e.compiler_spec(), "clang-4.0");
    }

    #[test]
    fn entries_routes_by_family() {
        let m = Matrix::builtin();
        assert_eq!(m.entries(OsFamily::Mac).len(), 1);
        assert_eq!(m.entries(OsFamily::Linux).len(), 2);
        assert_eq!(m.entries(OsFamily::Linux)[1].os, "debian-9");
    }
}
