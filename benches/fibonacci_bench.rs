use binggan::{black_box, plugins::*, InputGroup, PeakMemAlloc, INSTRUMENTED_SYSTEM};
use fibbench::fib::{naive_recursive, tabulated};

#[global_allocator]
pub static GLOBAL: &PeakMemAlloc<std::alloc::System> = &INSTRUMENTED_SYSTEM;

fn bench_fibonacci_group(mut runner: InputGroup<u32>) {
    runner
        .get_plugin_manager()
        // Set the peak mem allocator. This will enable peak memory reporting.
        .add_plugin(PeakMemAllocPlugin::new(GLOBAL));
    runner.register("naive_recursive", |n| {
        black_box(naive_recursive(black_box(*n)));
    });
    runner.register("tabulated", |n| {
        black_box(tabulated(black_box(*n as u64)));
    });
    runner.run();
}

fn main() {
    let mut group = InputGroup::new_with_inputs(vec![("10", 10), ("15", 15), ("20", 20)]);
    group.set_name("fibonacci");
    bench_fibonacci_group(group);
}
