// energy.rs
// Total electrostatic potential energy of the charge configuration

use crate::charge::Charge;

/// Half of Coulomb's constant, scaled so the readout is in units of 10^9.
/// The sum below visits every pair in both orders, which the halved
/// constant exactly offsets.
pub const ENERGY_SCALE: f32 = 4.49;

/// Total potential energy over all pairs of distinct charges, or `None`
/// when fewer than two are present. Coincident pairs contribute nothing
/// rather than dividing by zero.
pub fn total_energy(charges: &[Charge]) -> Option<f32> {
    if charges.len() < 2 {
        return None;
    }
    let mut energy = 0.0;
    for (i, a) in charges.iter().enumerate() {
        for (j, b) in charges.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = (a.pos - b.pos).mag();
            if distance != 0.0 {
                energy += (a.value * b.value) as f32 / distance;
            }
        }
    }
    Some(energy * ENERGY_SCALE)
}

/// Format an energy value the way the display sink shows it.
pub fn format_energy(energy: f32) -> String {
    format!("{:.2} * 10^9", energy)
}

#[cfg(test)]
mod tests {
    use super::{format_energy, total_energy};
    use crate::charge::Charge;
    use ultraviolet::Vec2;

    fn charge(x: f32, y: f32, value: i32) -> Charge {
        Charge::new(Vec2::new(x, y), value)
    }

    #[test]
    fn undefined_below_two_charges() {
        assert_eq!(total_energy(&[]), None);
        assert_eq!(total_energy(&[charge(0.0, 0.0, 10)]), None);
    }

    #[test]
    fn two_charge_reference_configuration() {
        // 10 and -5 at distance 5: both orders sum to -20, scaled by 4.49
        let charges = vec![charge(0.0, 0.0, 10), charge(3.0, 4.0, -5)];
        let energy = total_energy(&charges).unwrap();
        assert_eq!(format_energy(energy), "-89.80 * 10^9");
    }

    #[test]
    fn energy_is_symmetric_in_charge_order() {
        let forward = vec![charge(0.0, 0.0, 7), charge(30.0, 40.0, -3), charge(-10.0, 5.0, 12)];
        let mut reversed = forward.clone();
        reversed.reverse();
        let a = total_energy(&forward).unwrap();
        let b = total_energy(&reversed).unwrap();
        // summation order differs, so allow for rounding
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    #[test]
    fn energy_is_invariant_under_global_sign_flip() {
        let charges = vec![charge(0.0, 0.0, 7), charge(30.0, 40.0, -3), charge(-10.0, 5.0, 12)];
        let mut flipped = charges.clone();
        for c in &mut flipped {
            c.set_value(-c.value);
        }
        assert_eq!(total_energy(&charges), total_energy(&flipped));
    }

    #[test]
    fn coincident_charges_are_skipped() {
        let charges = vec![charge(1.0, 1.0, 10), charge(1.0, 1.0, 10)];
        assert_eq!(total_energy(&charges), Some(0.0));
    }
}
