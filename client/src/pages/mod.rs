//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetch or form state and delegates shared
//! rendering to `components`.

pub mod accueil;
pub mod connexion;
pub mod etablissement;
pub mod etablissements;
pub mod gestion_utilisateurs;
pub mod inscription;
pub mod profil;
pub mod statistiques;
