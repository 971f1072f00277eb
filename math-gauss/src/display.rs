//! Plain-text rendering of a system
//!
//! ```text
//! Matrix A:
//! [  1.00,  0.50,]
//! [  0.00,  1.00,]
//! Vector b:
//! [  3.00,  2.50,]
//! Vector y:
//! [  1.50,  1.00,]
//! ```

use crate::system::LinearSystem;
use ndarray::ArrayView1;
use std::fmt;

fn write_row(f: &mut fmt::Formatter<'_>, row: ArrayView1<'_, f64>) -> fmt::Result {
    write!(f, "[")?;
    for value in row {
        write!(f, " {value:5.2},")?;
    }
    writeln!(f, "]")
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix A:")?;
        for row in self.a.rows() {
            write_row(f, row)?;
        }
        writeln!(f, "Vector b:")?;
        write_row(f, self.b.view())?;
        writeln!(f, "Vector y:")?;
        write_row(f, self.y.view())
    }
}
