use std::collections::BTreeMap;

use crate::errors::{RelenvError, Result};
use crate::tools::{ToolArgs, ADD_LIBRARY, FACILITIES_LIB, FIND_PKG_PATH};
use crate::types::env::{keys, BuildEnv, Registration};
use crate::types::options::RegisterOptions;

/// Build descriptor for one package: the generate/exists pair the hosting
/// framework discovers helper modules by.
pub trait PackageDescriptor: Send + Sync + 'static {
    /// Package name, which doubles as the name of the package's own library.
    fn package(&self) -> &str;

    /// Capability probe: can this descriptor register against `env`?
    fn exists(&self, env: &BuildEnv) -> bool;

    /// Register this package's library and dependency declarations against
    /// `env`. Returns the registrations taken, in order; the same entries
    /// are appended to the environment's own log. Failures from tools or
    /// missing environment keys propagate unmodified.
    fn generate(&self, env: &mut BuildEnv, options: &RegisterOptions)
        -> Result<Vec<Registration>>;
}

/// Descriptor for the ntuple writer service package.
///
/// Consumers link the package library itself plus the facilities, Gaudi and
/// ROOT libraries the service is built against.
pub struct NtupleWriterSvc;

const PACKAGE_NAME: &str = "ntupleWriterSvc";

impl PackageDescriptor for NtupleWriterSvc {
    fn package(&self) -> &str {
        PACKAGE_NAME
    }

    fn exists(&self, _env: &BuildEnv) -> bool {
        true
    }

    fn generate(
        &self,
        env: &mut BuildEnv,
        options: &RegisterOptions,
    ) -> Result<Vec<Registration>> {
        let mut taken = Vec::new();
        if !options.deps_only {
            taken.push(env.tool(ADD_LIBRARY, &ToolArgs::library([self.package()]))?);
            if env.get_str(keys::PLATFORM)? == "win32"
                && env.get_str_or(keys::CONTAINER_NAME, "") == "GlastRelease"
            {
                taken.push(env.tool(FIND_PKG_PATH, &ToolArgs::package(self.package()))?);
            }
        }
        taken.push(env.tool(FACILITIES_LIB, &ToolArgs::None)?);
        let gaudi = env.get_list(keys::GAUDI_LIBS)?.to_vec();
        taken.push(env.tool(ADD_LIBRARY, &ToolArgs::Library { library: gaudi })?);
        let root = env.get_list(keys::ROOT_LIBS)?.to_vec();
        taken.push(env.tool(ADD_LIBRARY, &ToolArgs::Library { library: root })?);
        Ok(taken)
    }
}

/// Descriptors keyed by package name, the way the hosting framework looks
/// helpers up when a consumer declares a dependency.
pub struct DescriptorSet {
    descriptors: BTreeMap<String, Box<dyn PackageDescriptor>>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        DescriptorSet {
            descriptors: BTreeMap::new(),
        }
    }

    pub fn with_builtin_descriptors() -> Self {
        let mut set = Self::new();
        set.register(Box::new(NtupleWriterSvc));
        set
    }

    pub fn register(&mut self, descriptor: Box<dyn PackageDescriptor>) {
        self.descriptors
            .insert(descriptor.package().to_string(), descriptor);
    }

    pub fn get(&self, package: &str) -> Option<&dyn PackageDescriptor> {
        self.descriptors.get(package).map(|d| d.as_ref())
    }

    pub fn package_names(&self) -> Vec<&String> {
        self.descriptors.keys().collect()
    }

    /// Look a package up, probe `exists`, then run its `generate`.
    pub fn generate_for(
        &self,
        package: &str,
        env: &mut BuildEnv,
        options: &RegisterOptions,
    ) -> Result<Vec<Registration>> {
        let descriptor = self
            .get(package)
            .ok_or_else(|| RelenvError::PackageNotFound(package.to_string()))?;
        if !descriptor.exists(env) {
            return Err(RelenvError::PackageUnavailable(package.to_string()));
        }
        descriptor.generate(env, options)
    }
}

impl Default for DescriptorSet {
    fn default() -> Self {
        Self::with_builtin_descriptors()
    }
}
