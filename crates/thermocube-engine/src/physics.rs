//! Material properties and the physical parameters behind `alpha`.
//!
//! [`PhysicalParams`] pairs a [`Material`] with a time step and the
//! physical edge length of the whole cube. The per-cell length depends on
//! the grid resolution, so `alpha` is always derived for a given size.

use indexmap::IndexMap;
use thermocube_core::FieldError;
use thermocube_field::{compute_alpha, MAX_STABLE_ALPHA};

use crate::config::ConfigError;

// ── Material ────────────────────────────────────────────────────

/// Bulk thermal properties of a homogeneous solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Thermal conductivity in W/(m·K).
    pub conductivity: f64,
    /// Density in kg/m³.
    pub density: f64,
    /// Specific heat capacity in J/(kg·K).
    pub specific_heat: f64,
}

impl Material {
    /// Create a material from its conductivity, density, and specific heat.
    pub fn new(conductivity: f64, density: f64, specific_heat: f64) -> Self {
        Self {
            conductivity,
            density,
            specific_heat,
        }
    }

    /// Thermal diffusivity `k / (rho * c)` in m²/s.
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// Check that every property is finite, conductivity is non-negative,
    /// and density and specific heat are strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let props = [
            ("conductivity", self.conductivity),
            ("density", self.density),
            ("specific_heat", self.specific_heat),
        ];
        for (name, value) in props {
            if !value.is_finite() {
                return Err(ConfigError::InvalidMaterial {
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }
        if self.conductivity < 0.0 {
            return Err(ConfigError::InvalidMaterial {
                reason: format!("conductivity must be >= 0, got {}", self.conductivity),
            });
        }
        if self.density <= 0.0 {
            return Err(ConfigError::InvalidMaterial {
                reason: format!("density must be > 0, got {}", self.density),
            });
        }
        if self.specific_heat <= 0.0 {
            return Err(ConfigError::InvalidMaterial {
                reason: format!("specific_heat must be > 0, got {}", self.specific_heat),
            });
        }
        Ok(())
    }

    /// Normal-weight concrete: k = 2, rho = 2400, c = 1000.
    pub fn concrete() -> Self {
        Self::new(2.0, 2400.0, 1000.0)
    }

    /// Carbon steel.
    pub fn steel() -> Self {
        Self::new(50.0, 7800.0, 500.0)
    }

    /// Pure aluminium.
    pub fn aluminium() -> Self {
        Self::new(205.0, 2700.0, 900.0)
    }

    /// Pure copper.
    pub fn copper() -> Self {
        Self::new(400.0, 8960.0, 385.0)
    }

    /// Soda-lime glass.
    pub fn glass() -> Self {
        Self::new(1.0, 2500.0, 840.0)
    }

    /// Softwood across the grain.
    pub fn wood() -> Self {
        Self::new(0.15, 600.0, 1700.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::concrete()
    }
}

// ── MaterialLibrary ─────────────────────────────────────────────

/// Named materials in insertion order.
///
/// Iteration order is stable, so a host can list [`names()`](Self::names)
/// in a picker and map the selection back with [`get()`](Self::get).
#[derive(Clone, Debug, Default)]
pub struct MaterialLibrary {
    entries: IndexMap<String, Material>,
}

impl MaterialLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding every built-in preset, concrete first.
    pub fn with_presets() -> Self {
        let mut entries = IndexMap::new();
        for (name, material) in [
            ("concrete", Material::concrete()),
            ("steel", Material::steel()),
            ("aluminium", Material::aluminium()),
            ("copper", Material::copper()),
            ("glass", Material::glass()),
            ("wood", Material::wood()),
        ] {
            entries.insert(name.to_string(), material);
        }
        Self { entries }
    }

    /// Add or replace a material, returning the previous entry.
    ///
    /// A replaced entry keeps its original position.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidMaterial` if `material` fails
    /// [`Material::validate`]; the library is unchanged.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        material: Material,
    ) -> Result<Option<Material>, ConfigError> {
        material.validate()?;
        Ok(self.entries.insert(name.into(), material))
    }

    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.entries.get(name)
    }

    /// Material names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, material)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Material)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── PhysicalParams ──────────────────────────────────────────────

/// Material, time step, and cube dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParams {
    /// Material filling the cube.
    pub material: Material,
    /// Simulated seconds per step. Default: 0.1.
    pub dt: f64,
    /// Physical edge length of the whole cube in metres. Default: 1.0.
    pub edge_length: f64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            material: Material::concrete(),
            dt: 0.1,
            edge_length: 1.0,
        }
    }
}

impl PhysicalParams {
    /// Check the material, then that `dt` and `edge_length` are finite
    /// and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.material.validate()?;
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if !self.edge_length.is_finite() || self.edge_length <= 0.0 {
            return Err(ConfigError::InvalidEdgeLength {
                value: self.edge_length,
            });
        }
        Ok(())
    }

    /// Edge length of one cell when the cube is split into `size` cells
    /// per side.
    pub fn cell_length(&self, size: usize) -> f64 {
        self.edge_length / size as f64
    }

    /// Per-step diffusion coefficient at resolution `size`.
    pub fn alpha(&self, size: usize) -> Result<f64, FieldError> {
        compute_alpha(
            self.material.conductivity,
            self.material.density,
            self.material.specific_heat,
            self.dt,
            self.cell_length(size),
        )
    }

    /// Largest `dt` that keeps the scheme stable at resolution `size`.
    ///
    /// Infinite for a material with zero conductivity.
    pub fn max_stable_dt(&self, size: usize) -> f64 {
        let l = self.cell_length(size);
        MAX_STABLE_ALPHA * l * l / self.material.diffusivity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermocube_field::is_stable;

    #[test]
    fn presets_are_valid() {
        let library = MaterialLibrary::with_presets();
        assert_eq!(library.len(), 6);
        for (name, material) in library.iter() {
            assert!(material.validate().is_ok(), "{name} preset invalid");
            assert!(material.diffusivity() > 0.0);
        }
    }

    #[test]
    fn library_keeps_insertion_order() {
        let mut library = MaterialLibrary::with_presets();
        library.insert("granite", Material::new(2.8, 2700.0, 790.0)).unwrap();
        let previous = library.insert("steel", Material::new(45.0, 7850.0, 490.0)).unwrap();
        assert_eq!(previous, Some(Material::steel()));
        let names: Vec<&str> = library.names().collect();
        assert_eq!(
            names,
            ["concrete", "steel", "aluminium", "copper", "glass", "wood", "granite"]
        );
        assert_eq!(library.get("steel").unwrap().conductivity, 45.0);
        assert!(library.get("unobtainium").is_none());
    }

    #[test]
    fn library_rejects_invalid_material() {
        let mut library = MaterialLibrary::new();
        assert!(library.is_empty());
        let err = library.insert("foam", Material::new(0.03, 0.0, 1400.0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaterial { .. }));
        assert!(library.is_empty());
    }

    #[test]
    fn material_validation() {
        assert!(Material::new(0.0, 1.0, 1.0).validate().is_ok());
        assert!(Material::new(-1.0, 1.0, 1.0).validate().is_err());
        assert!(Material::new(1.0, 1.0, -1.0).validate().is_err());
        assert!(Material::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(Material::new(1.0, f64::INFINITY, 1.0).validate().is_err());
    }

    #[test]
    fn default_params_give_concrete_alpha() {
        let params = PhysicalParams::default();
        assert!(params.validate().is_ok());
        assert!((params.cell_length(5) - 0.2).abs() < 1e-15);
        let alpha = params.alpha(5).unwrap();
        assert!((alpha - 2.083_333_333e-6).abs() < 1e-14, "got {alpha}");
    }

    #[test]
    fn params_validation() {
        let mut params = PhysicalParams::default();
        params.dt = 0.0;
        assert_eq!(params.validate(), Err(ConfigError::InvalidTimeStep { value: 0.0 }));

        let mut params = PhysicalParams::default();
        params.edge_length = -1.0;
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidEdgeLength { value: -1.0 })
        );

        let mut params = PhysicalParams::default();
        params.material.density = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidMaterial { .. })
        ));
    }

    #[test]
    fn max_stable_dt_hits_the_bound() {
        for material in [Material::concrete(), Material::copper(), Material::wood()] {
            let mut params = PhysicalParams {
                material,
                ..PhysicalParams::default()
            };
            params.dt = params.max_stable_dt(20);
            let alpha = params.alpha(20).unwrap();
            assert!((alpha - MAX_STABLE_ALPHA).abs() < 1e-12, "got {alpha}");
            assert!(is_stable(alpha - 1e-15));
        }
    }

    #[test]
    fn insulator_has_no_stability_limit() {
        let params = PhysicalParams {
            material: Material::new(0.0, 1000.0, 1000.0),
            ..PhysicalParams::default()
        };
        assert_eq!(params.max_stable_dt(10), f64::INFINITY);
        assert_eq!(params.alpha(10), Ok(0.0));
    }
}
