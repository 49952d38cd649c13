use crate::model::{RankingTable, TableError};

const SAMPLE_NAMES: [&str; 30] = [
    "Aarav", "Vivaan", "Diya", "Ishaan", "Saanvi", "Arjun", "Mira", "Kabir", "Anaya", "Rohan",
    "Myra", "Aditya", "Avni", "Reyansh", "Kiara", "Atharv", "Tara", "Kian", "Nisha", "Dev",
    "Zara", "Aryan", "Meera", "Yash", "Aanya", "Neil", "Inaaya", "Rudra", "Aisha", "Veer",
];

const SAMPLE_MARKS: [[u32; 3]; 30] = [
    [78, 92, 65],
    [84, 73, 91],
    [59, 67, 88],
    [94, 81, 72],
    [65, 56, 70],
    [88, 90, 77],
    [43, 60, 55],
    [91, 82, 64],
    [76, 74, 85],
    [69, 58, 49],
    [99, 93, 88],
    [55, 61, 73],
    [80, 66, 90],
    [72, 77, 62],
    [64, 85, 91],
    [87, 69, 59],
    [53, 70, 68],
    [95, 89, 84],
    [61, 57, 63],
    [90, 95, 97],
    [45, 50, 48],
    [68, 71, 67],
    [79, 86, 74],
    [62, 66, 58],
    [93, 88, 96],
    [74, 79, 81],
    [58, 54, 60],
    [85, 92, 89],
    [77, 64, 83],
    [66, 62, 75],
];

/// The built-in 30-student, 3-subject marks table.
pub fn sample_table() -> Result<RankingTable, TableError> {
    let marks = SAMPLE_MARKS.iter().map(|row| row.as_slice()).collect::<Vec<_>>();
    RankingTable::from_parallel(&SAMPLE_NAMES, &marks)
}
