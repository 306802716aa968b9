pub use super::appointment::Entity as Appointment;
pub use super::clinic::Entity as Clinic;
pub use super::pet::Entity as Pet;
pub use super::pet_owner::Entity as PetOwner;
pub use super::role::Entity as Role;
pub use super::treatment_record::Entity as TreatmentRecord;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::veterinarian::Entity as Veterinarian;
pub use super::veterinarian_clinic::Entity as VeterinarianClinic;
pub use super::veterinarian_schedule::Entity as VeterinarianSchedule;
