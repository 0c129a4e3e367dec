use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde rename keeps the stored wire strings identical to the
/// Spanish labels the clinic data has always used.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(PatientStatus {
    Active => "Activo",
    FollowUp => "Seguimiento",
    Discharged => "Alta",
});

str_enum!(Gender {
    Male => "Masculino",
    Female => "Femenino",
    Other => "Otro",
});

str_enum!(AppointmentStatus {
    Confirmed => "confirmada",
    Pending => "pendiente",
    Cancelled => "cancelada",
});

str_enum!(SessionType {
    ManualTherapy => "Terapia manual",
    Rehabilitation => "Rehabilitación",
    InitialAssessment => "Evaluación inicial",
    Exercises => "Ejercicios",
});
