pub mod interaction;
pub mod moduli;
pub mod schmid;
pub mod shear;
pub mod systems;
