pub mod stage1_protein;
pub mod stage2_ligand;
pub mod stage3_gen2_panel;
pub mod stage4_gen2_ligand;
pub mod stage5_report;
