//! Fold-based higher-order functions: the recursion patterns that sum,
//! product, compose and pipe all specialize.

/// Right fold: `f(x0, f(x1, ... f(xn, init)))`.
pub fn fold_right<A, B, F: Fn(&A, B) -> B>(f: F, init: B, xs: &[A]) -> B {
    fn go<A, B, F: Fn(&A, B) -> B>(f: &F, init: B, xs: &[A]) -> B {
        match xs.split_first() {
            None => init,
            Some((head, tail)) => f(head, go(f, init, tail)),
        }
    }
    go(&f, init, xs)
}

/// Left fold: `f(xn, ... f(x1, f(x0, init)))`, iterative.
pub fn fold_left<A, B, F: Fn(&A, B) -> B>(f: F, init: B, xs: &[A]) -> B {
    let mut acc = init;
    for x in xs {
        acc = f(x, acc);
    }
    acc
}

/// Map expressed as a left fold that pushes each mapped element.
pub fn map<A, B, F: Fn(&A) -> B>(f: F, xs: &[A]) -> Vec<B> {
    fold_left(
        |x, mut acc: Vec<B>| {
            acc.push(f(x));
            acc
        },
        Vec::with_capacity(xs.len()),
        xs,
    )
}

/// Reduce: folds the tail onto the first element. None for an empty slice.
pub fn reduce<A: Clone, F: Fn(&A, A) -> A>(f: F, xs: &[A]) -> Option<A> {
    let (head, tail) = xs.split_first()?;
    Some(fold_left(f, head.clone(), tail))
}

/// `compose(vec![f1, f2, f3])(x)` is `f1(f2(f3(x)))`.
pub fn compose<A>(fns: Vec<Box<dyn Fn(A) -> A>>) -> impl Fn(A) -> A {
    move |mut x: A| {
        for f in fns.iter().rev() {
            x = f(x);
        }
        x
    }
}

/// `pipe(vec![f1, f2, f3])(x)` is `f3(f2(f1(x)))`.
pub fn pipe<A>(fns: Vec<Box<dyn Fn(A) -> A>>) -> impl Fn(A) -> A {
    move |mut x: A| {
        for f in fns.iter() {
            x = f(x);
        }
        x
    }
}
