//! Geolocation error taxonomy.

/// Why a position request failed.
///
/// After the two-tier retry is exhausted, the controller surfaces the
/// user-facing message of the final attempt's error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The user or platform denied access to the position.
    #[error("location permission denied")]
    PermissionDenied,

    /// The position could not be determined.
    #[error("position unavailable")]
    PositionUnavailable,

    /// The request did not resolve within its time bound.
    #[error("location request timed out")]
    Timeout,

    /// Anything else the platform reported.
    #[error("location error: {0}")]
    Other(String),
}

impl LocationError {
    /// The user-facing message for this failure class.
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => {
                "El acceso a la ubicación fue denegado. Revisa los permisos del navegador y del sistema."
            }
            LocationError::PositionUnavailable => {
                "No se pudo determinar tu ubicación en este momento. Intenta de nuevo en unos segundos."
            }
            LocationError::Timeout => {
                "La obtención de ubicación tardó demasiado. Intenta de nuevo con mejor señal."
            }
            LocationError::Other(_) => "No se pudo obtener tu ubicación por un error inesperado.",
        }
    }
}
