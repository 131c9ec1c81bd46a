// Fixed-length exponentiation on the scalar field and in Fp12.
//
// The running time of `pow` depends on the declared bit length only, so
// the same call is used for public and secret exponents alike.

use blsarith_algorithms::ec::bls12_381::{Fp, Fp12, Fp2, Fp6, Scalar};
use blsarith_algorithms::Error;

fn scalar_example() -> Result<(), Error> {
    let x = Scalar::from(3u64);

    // 3^5 with the exponent given as a 3-bit string
    let y = x.pow(&[0x05], 3)?;
    assert_eq!(y, Scalar::from(243u64));

    // Bits above the declared length are ignored
    let z = x.pow(&[0xfd], 3)?;
    assert_eq!(y, z);

    println!("3^5 = {}", y);
    Ok(())
}

fn fp12_example() -> Result<(), Error> {
    let u = Fp12::from(Fp6::from(Fp2::assign(Fp::zero(), Fp::one())));

    // u^4 = 1 in Fp2 and therefore in Fp12
    let one = u.pow(&[0x04], 3)?;
    assert_eq!(one, Fp12::one());

    let encoded = one.to_bytes();
    println!("Fp12 one encodes to {} bytes, first byte {:#04x}", encoded.len(), encoded[0]);
    Ok(())
}

fn main() -> Result<(), Error> {
    scalar_example()?;
    fp12_example()?;

    // An exponent longer than its buffer is rejected
    match Scalar::one().pow(&[0xff], 9) {
        Err(e) => println!("rejected: {}", e),
        Ok(_) => unreachable!(),
    }
    Ok(())
}
