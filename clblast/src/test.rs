use crate::sgemm;
use opencl::{Access, Platform};

#[test]
fn test_compute() {
    let Ok(platform) = Platform::first() else {
        return;
    };
    let Ok(dev) = platform.first_gpu() else {
        return;
    };
    let ctx = dev.context().unwrap();
    let queue = ctx.queue().unwrap();

    // |10 10|    |1 1 1 1|   |1 1|
    // |20 20| <- |2 2 2 2| · |2 2|
    // |30 30|    |3 3 3 3|   |3 3|
    //                        |4 4|
    let a: [f32; 12] = std::array::from_fn(|i| (i / 4 + 1) as _);
    let b: [f32; 8] = std::array::from_fn(|i| (i / 2 + 1) as _);

    let a = ctx.from_host(&a, Access::ReadOnly, "Creating buffer A").unwrap();
    let b = ctx.from_host(&b, Access::ReadOnly, "Creating buffer B").unwrap();
    let mut c = ctx
        .from_host(&[0.0f32; 6], Access::ReadWrite, "Creating buffer C")
        .unwrap();

    let event = sgemm(&queue, (3, 2, 4), 1., &a, &b, 0., &mut c).unwrap();
    event.synchronize().unwrap();

    let mut host = [0.0f32; 6];
    c.copy_out(&mut host, &queue).unwrap();
    assert_eq!(host, [10., 10., 20., 20., 30., 30.]);
}
